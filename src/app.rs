//! Root widget component and the handlers wiring search and favorites.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::favorites_panel::FavoritesPanel;
use crate::components::result_list::{ListMode, ResultList};
use crate::components::search_box::SearchBox;
use crate::context::WidgetContext;
use crate::net::search::{is_searchable, search as run_search};
use crate::net::types::SearchOutcome;
use crate::state::favorites::{FavoritesState, add_favorite};
use crate::state::search::{ApplyStatus, SearchState};
use crate::store::favorites::FavoriteRecord;
use crate::util::notice;

/// Root widget component.
///
/// Builds the [`WidgetContext`], renders persisted favorites, and lays out
/// the four page regions under their configured ids.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ctx = WidgetContext::browser();
    let favorites = RwSignal::new(FavoritesState::default());
    let search = RwSignal::new(SearchState::default());
    provide_context(ctx.clone());

    favorites.update(|f| f.reload_from(&ctx.favorites));

    let on_search = {
        let ctx = ctx.clone();
        Callback::new(move |query: String| spawn_search(&ctx, search, query))
    };
    let on_favorite = {
        let ctx = ctx.clone();
        Callback::new(move |record: FavoriteRecord| store_favorite(&ctx, favorites, record))
    };

    let ids = ctx.config.element_ids.clone();
    let results = Signal::derive(move || search.with(|s| s.results.clone()));

    view! {
        <Title text="favfinder"/>
        <div class="favfinder">
            <section class="favfinder__search">
                <SearchBox id=ids.search_box on_search=on_search/>
                <p class="favfinder__count">
                    "Results: "
                    <span id=ids.result_count>{move || search.with(SearchState::count_label)}</span>
                </p>
                <div id=ids.results class="favfinder__results">
                    <ResultList rows=results mode=ListMode::Search on_favorite=Some(on_favorite)/>
                </div>
            </section>
            <section class="favfinder__favorites">
                <h2>"Favorites"</h2>
                <FavoritesPanel id=ids.favorites favorites=favorites/>
            </section>
        </div>
    }
}

/// Add `record` to favorites and re-render the favorites region, alerting on
/// duplicates or missing storage.
fn store_favorite(ctx: &WidgetContext, favorites: RwSignal<FavoritesState>, record: FavoriteRecord) {
    let id = record.id.clone();
    match favorites.try_update(|f| add_favorite(&ctx.favorites, f, record)) {
        Some(Ok(())) => leptos::logging::log!("favorite {id} saved"),
        Some(Err(e)) => notice::report(&e),
        None => leptos::logging::warn!("favorites view disposed; favorite {id} not rendered"),
    }
}

/// Issue a search for `query` and apply its outcome when it settles.
fn spawn_search(ctx: &WidgetContext, search: RwSignal<SearchState>, query: String) {
    if !is_searchable(&query) {
        return;
    }
    let Some(seq) = search.try_update(SearchState::issue) else {
        return;
    };
    let ctx = ctx.clone();

    leptos::task::spawn_local(async move {
        let request = ctx.search_request(&query, seq);
        let outcome = SearchOutcome::from(run_search(&request).await);
        if let SearchOutcome::Rejected(reason) = &outcome {
            leptos::logging::warn!("search {seq} for '{query}' dropped: {reason}");
        }
        if search.try_update(|s| s.apply(seq, outcome)) == Some(ApplyStatus::Stale) {
            leptos::logging::log!("search {seq} for '{query}' superseded");
        }
    });
}
