//! Activity board page: header, search, card list, notices and login dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only page. It fetches the catalog once on mount and re-renders
//! the whole card list whenever the catalog, query or session changes. The
//! data set is small, so no per-card diffing is attempted.

use leptos::prelude::*;

use crate::components::{
    activity_card::ActivityCard, auth_controls::AuthControls, login_modal::LoginModal, notice_banner::NoticeBanner,
    search_box::SearchBox,
};
use crate::config::ClientConfig;
use crate::state::catalog::CatalogState;
use crate::state::notice::NoticeState;
use crate::state::session::SessionState;
use crate::util::actions::{prepare_register, prepare_unregister, register_prompt};
use crate::util::browser;
use crate::util::tasks;
use crate::util::view_model::{BoardView, board_view};

#[component]
pub fn ActivityBoardPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    tasks::refresh_catalog(config.clone(), catalog);

    let register_config = config.clone();
    let on_register = Callback::new(move |activity: String| {
        let email = browser::prompt(&register_prompt(&activity));
        let token = session.with_untracked(|state| state.token.clone());
        tasks::dispatch_action(
            register_config.clone(),
            prepare_register(&activity, email, token),
            catalog,
            notices,
        );
    });

    let on_unregister = Callback::new(move |(activity, email): (String, String)| {
        let token = session.with_untracked(|state| state.token.clone());
        tasks::dispatch_action(
            config.clone(),
            prepare_unregister(&activity, &email, token),
            catalog,
            notices,
        );
    });

    let authenticated = Memo::new(move |_| session.with(SessionState::is_authenticated));
    let board = move || catalog.with(|state| board_view(state, authenticated.get()));

    view! {
        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
            <AuthControls/>
        </header>
        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <SearchBox/>
                <div id="activities-list">
                    {move || match board() {
                        BoardView::Cards(cards) => {
                            cards
                                .into_iter()
                                .map(|card| {
                                    view! {
                                        <ActivityCard
                                            card=card
                                            on_register=on_register
                                            on_unregister=on_unregister
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                        placeholder => view! { <p>{placeholder.placeholder().unwrap_or_default()}</p> }.into_any(),
                    }}
                </div>
            </section>
            <NoticeBanner/>
        </main>
        <LoginModal/>
    }
}
