//! Live search input bound to the catalog query.

use leptos::prelude::*;

use crate::state::catalog::CatalogState;

#[component]
pub fn SearchBox() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let input = RwSignal::new(String::new());

    view! {
        <input
            id="search-input"
            type="text"
            placeholder="Search activities..."
            prop:value=move || input.get()
            on:input=move |ev| {
                let raw = event_target_value(&ev);
                catalog.update(|state| state.set_query(&raw));
                input.set(raw);
            }
        />
    }
}
