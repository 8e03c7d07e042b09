//! Products page at `/products`.

use leptos::prelude::*;

use crate::components::product_table::ProductTable;
use crate::components::status_line::{StatusAlert, status_line};
use crate::net::api::fetch_products;
use crate::state::fetch::use_view_fetch;

/// Fetches the catalog once on mount and renders it as a table.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let state = use_view_fetch(fetch_products);

    move || {
        let current = state.get();
        if let Some(line) = status_line(&current) {
            return view! { <StatusAlert line=line/> }.into_any();
        }
        let products = current.data().to_vec();
        view! {
            <div class="container mt-4">
                <h2>"Products"</h2>
                <ProductTable products=products/>
            </div>
        }
        .into_any()
    }
}
