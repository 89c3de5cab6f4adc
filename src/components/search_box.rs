//! Search input that fires on every key release.

use leptos::prelude::*;

/// Text input reporting its current value to `on_search` on each `keyup`.
#[component]
pub fn SearchBox(id: String, on_search: Callback<String>) -> impl IntoView {
    view! {
        <input
            id=id
            class="favfinder__input"
            type="search"
            placeholder="Search pages"
            autocomplete="off"
            on:keyup=move |ev: leptos::ev::KeyboardEvent| {
                on_search.run(event_target_value(&ev));
            }
        />
    }
}
