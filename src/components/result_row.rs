//! One rendered record: name, nested category, optional favorite anchor.

use leptos::prelude::*;

use crate::components::result_list::RowModel;
use crate::store::favorites::FavoriteRecord;

/// A single result row.
///
/// The favorite anchor mirrors the record in its `id`, `data-category` and
/// `data-name` attributes so the page can read back what was clicked.
#[component]
pub fn ResultRow(row: RowModel, on_favorite: Option<Callback<FavoriteRecord>>) -> impl IntoView {
    let RowModel { name, category, affordance } = row;

    let anchor = affordance.map(|record| {
        let id = record.id.clone();
        let data_category = record.category.clone();
        let data_name = record.name.clone();
        view! {
            <a
                class="favIcon"
                href="#"
                id=id
                data-category=data_category
                data-name=data_name
                title="Add to favorites"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    if let Some(cb) = on_favorite {
                        cb.run(record.clone());
                    }
                }
            ></a>
        }
    });

    view! {
        <div class="result-row">
            <div class="nameContainer">
                {name}
                <div class="categoryContainer">{category}</div>
                {anchor}
            </div>
        </div>
    }
}
