//! Login/logout toggle in the page header.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::catalog::CatalogState;
use crate::state::session::SessionState;
use crate::util::tasks;

#[component]
pub fn AuthControls() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let authenticated = Memo::new(move |_| session.with(SessionState::is_authenticated));

    view! {
        <div id="login-container">
            {move || {
                if authenticated.get() {
                    let config = config.clone();
                    view! {
                        <button
                            id="logout-button"
                            on:click=move |_| tasks::logout(config.clone(), session, catalog)
                        >
                            "Logout"
                        </button>
                    }
                        .into_any()
                } else {
                    view! {
                        <button id="login-button" on:click=move |_| session.update(SessionState::open_login)>
                            "Login"
                        </button>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
