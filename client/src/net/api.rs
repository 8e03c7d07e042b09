//! REST helpers for the host's collection routes.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since views only fetch after
//! hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses to a human-readable `String` so the owning view can
//! render it verbatim. Nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Product, StorageObject};

/// Host route proxying the catalog backend's product list.
pub const PRODUCTS_ENDPOINT: &str = "/api/catalog/products";

/// Host route listing the configured bucket.
pub const OBJECTS_ENDPOINT: &str = "/api/storage/objects";

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Pick the message out of a host failure body, falling back to the status.
#[cfg(any(test, feature = "hydrate"))]
fn failure_message(status: u16, body: &str) -> String {
    serde_json::from_str::<super::types::ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| request_failed_message(status))
}

#[cfg(feature = "hydrate")]
async fn fetch_collection<T: serde::de::DeserializeOwned>(url: &str) -> Result<Vec<T>, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(failure_message(resp.status(), &body));
    }
    resp.json::<Vec<T>>().await.map_err(|e| e.to_string())
}

/// Fetch the product list from `/api/catalog/products`.
///
/// # Errors
///
/// Returns the error message if the request fails, the host reports an
/// upstream failure, or the body is not a product array.
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    #[cfg(feature = "hydrate")]
    {
        fetch_collection(PRODUCTS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the bucket listing from `/api/storage/objects`.
///
/// # Errors
///
/// Returns the error message if the request fails, the object store rejects
/// the listing, or the body is not an object array.
pub async fn fetch_storage_objects() -> Result<Vec<StorageObject>, String> {
    #[cfg(feature = "hydrate")]
    {
        let result = fetch_collection(OBJECTS_ENDPOINT).await;
        if let Err(e) = &result {
            log::error!("Error fetching S3 objects: {e}");
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
