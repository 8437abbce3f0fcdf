/// Lifecycle of the authorization check guarding a protected view.
/// Starts `Pending`, resolves exactly once per mount and then stays put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Pending,
    Authorized,
    Unauthorized,
}

impl AuthState {
    pub fn resolve(self, authorized: bool) -> Self {
        match self {
            Self::Pending => {
                if authorized {
                    Self::Authorized
                } else {
                    Self::Unauthorized
                }
            }
            // terminal states never flip without a remount
            resolved => resolved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_pending() {
        assert_eq!(AuthState::default(), AuthState::Pending);
    }

    #[test]
    fn resolves_from_pending() {
        assert_eq!(AuthState::Pending.resolve(true), AuthState::Authorized);
        assert_eq!(AuthState::Pending.resolve(false), AuthState::Unauthorized);
    }

    #[test]
    fn terminal_states_stay_put() {
        assert_eq!(AuthState::Authorized.resolve(false), AuthState::Authorized);
        assert_eq!(AuthState::Unauthorized.resolve(true), AuthState::Unauthorized);
    }
}
