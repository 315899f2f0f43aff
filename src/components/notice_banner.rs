//! Single-slot status banner for action outcomes.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    let class = move || {
        notices.with(|state| {
            state
                .current
                .as_ref()
                .map_or("hidden", |notice| notice.kind.css_class())
        })
    };
    let text = move || {
        notices.with(|state| {
            state
                .current
                .as_ref()
                .map(|notice| notice.text.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div id="message" class=class role="status">
            {text}
        </div>
    }
}
