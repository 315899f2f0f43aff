#![cfg(not(feature = "csr"))]

use std::time::Duration;

use super::*;
use crate::util::actions::{prepare_register, prepare_unregister};

fn with_owner(test: impl FnOnce()) {
    let owner = Owner::new();
    owner.with(test);
}

#[test]
fn refresh_issues_new_fetch_sequence() {
    with_owner(|| {
        let catalog = RwSignal::new(CatalogState::default());
        refresh_catalog(ClientConfig::default(), catalog);
        refresh_catalog(ClientConfig::default(), catalog);
        assert_eq!(catalog.with_untracked(CatalogState::latest_seq), 2);
    });
}

#[test]
fn show_notice_fills_single_slot() {
    with_owner(|| {
        let notices = RwSignal::new(NoticeState::default());
        show_notice(notices, Notice::success("Signed up"), Duration::from_secs(5));
        show_notice(notices, Notice::error("Activity not found"), Duration::from_secs(5));
        let current = notices.with_untracked(|state| state.current.clone());
        assert_eq!(current, Some(Notice::error("Activity not found")));
    });
}

#[test]
fn unregister_without_token_sends_nothing() {
    with_owner(|| {
        let catalog = RwSignal::new(CatalogState::default());
        let notices = RwSignal::new(NoticeState::default());
        dispatch_action(
            ClientConfig::default(),
            prepare_unregister("Chess Club", "a@x.com", None),
            catalog,
            notices,
        );
        assert_eq!(catalog.with_untracked(CatalogState::latest_seq), 0);
        assert!(!notices.with_untracked(NoticeState::is_visible));
    });
}

#[test]
fn cancelled_register_prompt_sends_nothing() {
    with_owner(|| {
        let catalog = RwSignal::new(CatalogState::default());
        let notices = RwSignal::new(NoticeState::default());
        dispatch_action(
            ClientConfig::default(),
            prepare_register("Chess Club", None, Some("tok".to_owned())),
            catalog,
            notices,
        );
        assert_eq!(catalog.with_untracked(CatalogState::latest_seq), 0);
        assert!(!notices.with_untracked(NoticeState::is_visible));
    });
}

#[test]
fn logout_drops_token_and_refreshes() {
    with_owner(|| {
        let session = RwSignal::new(SessionState { token: Some("tok".to_owned()), ..SessionState::default() });
        let catalog = RwSignal::new(CatalogState::default());
        logout(ClientConfig::default(), session, catalog);
        assert!(!session.with_untracked(SessionState::is_authenticated));
        assert_eq!(catalog.with_untracked(CatalogState::latest_seq), 1);
    });
}

#[test]
fn login_off_browser_releases_pending_flag() {
    with_owner(|| {
        let session = RwSignal::new(SessionState::default());
        let catalog = RwSignal::new(CatalogState::default());
        session.update(|state| {
            state.begin_login();
        });
        submit_login(ClientConfig::default(), "mrodriguez".to_owned(), "secret".to_owned(), session, catalog);
        assert!(!session.with_untracked(|state| state.login_pending));
        assert!(!session.with_untracked(SessionState::is_authenticated));
    });
}
