use std::cell::RefCell;

use super::*;

#[derive(Default)]
struct MemoryStore {
    token: RefCell<Option<String>>,
}

impl SessionStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

#[test]
fn default_session_is_anonymous() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert!(!state.login_open);
    assert!(!state.login_pending);
}

#[test]
fn from_store_restores_persisted_token() {
    let store = MemoryStore::default();
    store.set("persisted");
    let state = SessionState::from_store(&store);
    assert_eq!(state.token.as_deref(), Some("persisted"));
    assert!(state.is_authenticated());
}

#[test]
fn complete_login_persists_token_and_closes_dialog() {
    let store = MemoryStore::default();
    let mut state = SessionState::default();
    state.open_login();
    assert!(state.begin_login());

    state.complete_login(&store, "tok".to_owned());

    assert!(state.is_authenticated());
    assert!(!state.login_open);
    assert!(!state.login_pending);
    assert_eq!(store.get().as_deref(), Some("tok"));
}

#[test]
fn empty_token_from_server_stays_anonymous() {
    let store = MemoryStore::default();
    let mut state = SessionState::default();
    state.open_login();
    state.begin_login();

    state.complete_login(&store, String::new());

    assert!(!state.is_authenticated());
    assert!(!state.login_pending);
    assert_eq!(store.get(), None);
    assert_eq!(SessionState::from_store(&store), SessionState::default());
}

#[test]
fn begin_login_rejects_overlapping_submit() {
    let mut state = SessionState::default();
    assert!(state.begin_login());
    assert!(!state.begin_login());
}

#[test]
fn fail_login_leaves_session_unchanged() {
    let store = MemoryStore::default();
    let mut state = SessionState::from_store(&store);
    state.open_login();
    state.begin_login();

    state.fail_login();

    assert!(!state.is_authenticated());
    assert!(state.login_open);
    assert!(!state.login_pending);
    assert_eq!(store.get(), None);
}

#[test]
fn logout_clears_store_and_token() {
    let store = MemoryStore::default();
    let mut state = SessionState::default();
    state.complete_login(&store, "tok".to_owned());

    state.logout(&store);

    assert!(!state.is_authenticated());
    assert_eq!(store.get(), None);
}

#[test]
fn close_login_hides_dialog() {
    let mut state = SessionState::default();
    state.open_login();
    state.close_login();
    assert!(!state.login_open);
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_store_is_anonymous_off_browser() {
    let store = crate::util::session_store::LocalStorageStore::new("token");
    store.set("ignored");
    assert_eq!(store.get(), None);
    assert_eq!(store.key(), "token");
    store.clear();
}
