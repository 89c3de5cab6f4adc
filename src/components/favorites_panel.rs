//! Favorites container.

use leptos::prelude::*;

use crate::components::result_list::{ListMode, ResultList};
use crate::state::favorites::FavoritesState;

/// Renders the favorites rows and keeps the container scrolled to its end.
#[component]
pub fn FavoritesPanel(id: String, favorites: RwSignal<FavoritesState>) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();
    let rows = Signal::derive(move || favorites.with(|f| f.rows.clone()));

    Effect::new(move || {
        // Nothing to scroll until the first non-empty render.
        if favorites.with(|f| f.renders) == 0 {
            return;
        }
        #[cfg(feature = "csr")]
        {
            if let Some(el) = container.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    view! {
        <div id=id class="favfinder__favorites-list" node_ref=container>
            <ResultList rows=rows mode=ListMode::Favorites on_favorite=None/>
        </div>
    }
}
