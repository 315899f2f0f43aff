//! Root application component and shared context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::ClientConfig;
use crate::pages::board::ActivityBoardPage;
use crate::state::{catalog::CatalogState, notice::NoticeState, session::SessionState};
use crate::util::session_store::LocalStorageStore;

/// Root application component.
///
/// Provides the client config and every shared state signal, then renders the
/// single activity board page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let store = LocalStorageStore::new(&config.token_storage_key);

    let catalog = RwSignal::new(CatalogState::default());
    let session = RwSignal::new(SessionState::from_store(&store));
    let notices = RwSignal::new(NoticeState::default());

    provide_context(config);
    provide_context(catalog);
    provide_context(session);
    provide_context(notices);

    view! {
        <Title text="Mergington High School Activities"/>
        <ActivityBoardPage/>
    }
}
