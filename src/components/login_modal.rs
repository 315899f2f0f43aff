//! Username/password dialog for obtaining a bearer token.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::catalog::CatalogState;
use crate::state::session::SessionState;
use crate::util::tasks;

#[component]
pub fn LoginModal() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        if !session.try_update(SessionState::begin_login).unwrap_or(false) {
            return;
        }
        tasks::submit_login(
            config.clone(),
            username.get_untracked(),
            password.get_untracked(),
            session,
            catalog,
        );
    });
    let close = move |_| session.update(SessionState::close_login);

    view! {
        <Show when=move || session.with(|state| state.login_open)>
            <div id="login-modal" class="modal" on:click=close>
                <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                    <span class="close-button" on:click=close>
                        "×"
                    </span>
                    <h3>"Teacher Login"</h3>
                    <form
                        id="login-form"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            submit.run(());
                        }
                    >
                        <label for="username">"Username:"</label>
                        <input
                            id="username"
                            type="text"
                            required
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <label for="password">"Password:"</label>
                        <input
                            id="password"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button type="submit" disabled=move || session.with(|state| state.login_pending)>
                            "Login"
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
