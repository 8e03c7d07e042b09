//! Bucket listing as a Bootstrap list group.

#[cfg(test)]
#[path = "object_list_test.rs"]
mod object_list_test;

use leptos::prelude::*;

use crate::net::types::StorageObject;

/// `"{key} - {size} bytes"`.
#[must_use]
pub fn object_label(object: &StorageObject) -> String {
    format!("{} - {} bytes", object.key, object.size)
}

#[component]
pub fn ObjectList(objects: Vec<StorageObject>) -> impl IntoView {
    let items = objects
        .iter()
        .map(|object| view! { <li class="list-group-item">{object_label(object)}</li> })
        .collect::<Vec<_>>();

    view! { <ul class="list-group mt-3">{items}</ul> }
}
