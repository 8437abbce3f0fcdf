use crate::services::SessionContext;
use std::rc::Rc;

/// Authorization strategy for the gate. Presence of a credential is treated
/// as sufficient proof of authorization; validity and expiry are the
/// backend's concern and surface as 401s on the actual requests.
pub struct AuthService {
    session: Rc<SessionContext>,
}

impl AuthService {
    pub fn new(session: Rc<SessionContext>) -> Self {
        Self { session }
    }

    /// Async predicate run once per mount of a gated view. A storage failure
    /// shows up as a missing token here, never as a rejected future, so the
    /// gate can treat any non-`true` outcome uniformly as unauthorized.
    pub async fn check(&self) -> bool {
        self.session
            .token()
            .is_some_and(|token| !token.trim().is_empty())
    }

    pub fn login(&self, token: &str) {
        self.session.set_token(token);
    }

    pub fn logout(&self) {
        self.session.clear();
    }
}
