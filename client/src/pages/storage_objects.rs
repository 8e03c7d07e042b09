//! Bucket listing page at `/s3`.

use leptos::prelude::*;

use crate::components::object_list::ObjectList;
use crate::components::status_line::{StatusAlert, status_line};
use crate::net::api::fetch_storage_objects;
use crate::state::fetch::use_view_fetch;

/// Lists the configured bucket once on mount.
#[component]
pub fn StorageObjectsPage() -> impl IntoView {
    let state = use_view_fetch(fetch_storage_objects);

    move || {
        let current = state.get();
        if let Some(line) = status_line(&current) {
            return view! { <StatusAlert line=line/> }.into_any();
        }
        let objects = current.data().to_vec();
        view! {
            <div class="container mt-4">
                <h2>"S3 Objects"</h2>
                <ObjectList objects=objects/>
            </div>
        }
        .into_any()
    }
}
