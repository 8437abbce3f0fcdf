use gloo_storage::{LocalStorage, Storage};
use log::error;
use std::cell::RefCell;

const TOKEN_KEY: &str = "authToken";

/// Holder of the session credential, constructed once at app start and
/// injected into every service that needs it. The token itself is opaque;
/// no expiry or refresh logic lives here.
pub struct SessionContext {
    token: RefCell<Option<String>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            token: RefCell::new(LocalStorage::get(TOKEN_KEY).ok()),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn set_token(&self, token: &str) {
        if let Err(err) = LocalStorage::set(TOKEN_KEY, token.to_string()) {
            error!("failed to persist session token: {err}");
        }
        self.token.replace(Some(token.to_string()));
    }

    pub fn clear(&self) {
        LocalStorage::delete(TOKEN_KEY);
        self.token.replace(None);
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
