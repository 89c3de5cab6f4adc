//! Record list shared by the search results and favorites regions.
//!
//! DESIGN
//! ======
//! The list re-renders every row whenever its source changes; there is no
//! keyed diffing. Lists are short, and a full redraw keeps the view an exact
//! image of its source.

#[cfg(test)]
#[path = "result_list_test.rs"]
mod result_list_test;

use leptos::prelude::*;

use crate::components::result_row::ResultRow;
use crate::store::favorites::FavoriteRecord;

/// Which region a list renders into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListMode {
    /// Search results: rows carry an add-to-favorites affordance.
    Search,
    /// Favorites: rows are display-only.
    Favorites,
}

/// Display data for one row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowModel {
    pub name: String,
    pub category: String,
    /// Record handed to the add callback when the affordance is activated.
    pub affordance: Option<FavoriteRecord>,
}

/// Build the row for `record` in `mode`.
pub fn row_model(record: &FavoriteRecord, mode: ListMode) -> RowModel {
    RowModel {
        name: record.name.clone(),
        category: record.category.clone(),
        affordance: match mode {
            ListMode::Search => Some(record.clone()),
            ListMode::Favorites => None,
        },
    }
}

/// Build rows for every record, in order.
pub fn row_models(records: &[FavoriteRecord], mode: ListMode) -> Vec<RowModel> {
    records.iter().map(|r| row_model(r, mode)).collect()
}

/// Render `rows` as result rows. Appends into whatever container wraps it.
#[component]
pub fn ResultList(
    #[prop(into)] rows: Signal<Vec<FavoriteRecord>>,
    mode: ListMode,
    on_favorite: Option<Callback<FavoriteRecord>>,
) -> impl IntoView {
    move || {
        rows.with(|records| row_models(records, mode))
            .into_iter()
            .map(|row| view! { <ResultRow row=row on_favorite=on_favorite/> })
            .collect_view()
    }
}
