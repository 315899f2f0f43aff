//! Request -> state update sequences shared by the board's components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every user action is a one-shot cycle: send a request, update a signal,
//! possibly refresh the catalog. These helpers keep that sequencing in one
//! place instead of inside nested event closures. Network work is spawned on
//! the browser event loop (`csr` only); host builds apply only the
//! synchronous part.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::catalog::CatalogState;
use crate::state::notice::{Notice, NoticeState};
use crate::state::session::SessionState;
use crate::util::actions::{ActionRequest, Precondition};
use crate::util::browser;
use crate::util::session_store::LocalStorageStore;

/// Refetch the catalog. Responses from superseded fetches are dropped.
pub fn refresh_catalog(config: ClientConfig, catalog: RwSignal<CatalogState>) {
    let seq = catalog.try_update(CatalogState::begin_fetch).unwrap_or_default();

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_activities(&config).await;
        if let Err(e) = &result {
            leptos::logging::warn!("Error fetching activities: {e}");
        }
        let applied = catalog.try_update(|state| state.apply_fetch(seq, result)).unwrap_or(false);
        if !applied {
            leptos::logging::log!("discarding stale catalog response #{seq}");
        }
    });

    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, seq);
    }
}

/// Show `notice` in the banner and hide it after `timeout` unless a newer
/// notice has replaced it.
pub fn show_notice(notices: RwSignal<NoticeState>, notice: Notice, timeout: std::time::Duration) {
    let seq = notices.try_update(|state| state.show(notice)).unwrap_or_default();

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(timeout).await;
        notices.try_update(|state| state.expire(seq));
    });

    #[cfg(not(feature = "csr"))]
    {
        let _ = (seq, timeout);
    }
}

/// Run a prepared register/unregister action, or raise its precondition
/// alert.
pub fn dispatch_action(
    config: ClientConfig,
    prepared: Result<ActionRequest, Precondition>,
    catalog: RwSignal<CatalogState>,
    notices: RwSignal<NoticeState>,
) {
    let request = match prepared {
        Ok(request) => request,
        Err(precondition) => {
            if let Some(text) = precondition.alert_text() {
                browser::alert(text);
            }
            return;
        }
    };

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = crate::util::actions::submit(&config, &request).await;
        if let Err(e) = &result {
            leptos::logging::warn!("{} failed for {}: {e}", request.kind.label(), request.activity);
        }
        let outcome = crate::util::actions::outcome(request.kind, result);
        show_notice(notices, outcome.notice, config.notice_timeout);
        if outcome.refresh {
            refresh_catalog(config, catalog);
        }
    });

    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, request, catalog, notices);
    }
}

/// Exchange credentials for a token; on success persist it, leave the login
/// dialog and refresh so the action controls appear.
pub fn submit_login(
    config: ClientConfig,
    username: String,
    password: String,
    session: RwSignal<SessionState>,
    catalog: RwSignal<CatalogState>,
) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::login(&config, &username, &password).await {
            Ok(token) => {
                let store = LocalStorageStore::new(&config.token_storage_key);
                session.update(|state| state.complete_login(&store, token));
                refresh_catalog(config, catalog);
            }
            Err(e) => {
                leptos::logging::warn!("Login error: {e}");
                session.update(SessionState::fail_login);
                browser::alert(crate::util::actions::login_failure_text(&e));
            }
        }
    });

    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, username, password, catalog);
        session.update(SessionState::fail_login);
    }
}

/// Forget the token locally and refresh so the action controls disappear.
pub fn logout(config: ClientConfig, session: RwSignal<SessionState>, catalog: RwSignal<CatalogState>) {
    let store = LocalStorageStore::new(&config.token_storage_key);
    session.update(|state| state.logout(&store));
    refresh_catalog(config, catalog);
}
