//! Session state: bearer token presence and login dialog status.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::session_store::SessionStore;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub login_open: bool,
    pub login_pending: bool,
}

impl SessionState {
    /// Restore the session persisted by a previous page load.
    pub fn from_store(store: &impl SessionStore) -> Self {
        Self { token: store.get(), ..Self::default() }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn open_login(&mut self) {
        self.login_open = true;
    }

    pub fn close_login(&mut self) {
        self.login_open = false;
    }

    /// Mark a login request in flight. Returns `false` if one already is.
    pub fn begin_login(&mut self) -> bool {
        if self.login_pending {
            return false;
        }
        self.login_pending = true;
        true
    }

    /// Persist `token` and switch to authenticated mode. An empty token is
    /// anonymous, same as an empty stored value.
    pub fn complete_login(&mut self, store: &impl SessionStore, token: String) {
        if token.is_empty() {
            store.clear();
            self.token = None;
        } else {
            store.set(&token);
            self.token = Some(token);
        }
        self.login_open = false;
        self.login_pending = false;
    }

    /// Login rejected or failed: session is left as it was.
    pub fn fail_login(&mut self) {
        self.login_pending = false;
    }

    /// Drop the token locally. The server is not contacted.
    pub fn logout(&mut self, store: &impl SessionStore) {
        store.clear();
        self.token = None;
    }
}
