//! Products table.

#[cfg(test)]
#[path = "product_table_test.rs"]
mod product_table_test;

use leptos::prelude::*;

use crate::net::types::Product;

/// Render a price the way the catalog shows it: `$` followed by the number.
#[must_use]
pub fn format_price(value: f64) -> String {
    format!("${value}")
}

/// Display cells for one product row: id, name, price, price with tax.
#[must_use]
pub fn product_cells(product: &Product) -> [String; 4] {
    [
        product.id.to_string(),
        product.name.clone(),
        format_price(product.price),
        format_price(product.price_with_tax),
    ]
}

/// Table with one row per product. An empty slice renders an empty body.
#[component]
pub fn ProductTable(products: Vec<Product>) -> impl IntoView {
    let rows = products
        .iter()
        .map(|product| {
            let [id, name, price, price_with_tax] = product_cells(product);
            view! {
                <tr>
                    <td>{id}</td>
                    <td>{name}</td>
                    <td>{price}</td>
                    <td>{price_with_tax}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <table class="table table-bordered mt-3">
            <thead class="thead-dark">
                <tr>
                    <th>"ID"</th>
                    <th>"Name"</th>
                    <th>"Price"</th>
                    <th>"Price with Tax"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
