//! Catalog product fetcher.
//!
//! One `GET {api_url}/api/products` per activation. No retry, no caching.
//! Pure parsing lives in `parse_products` for testability.

use async_trait::async_trait;
use storefront_client::net::types::Product;

use crate::config::CatalogConfig;
use crate::error::FetchError;

/// Source of the product list, one upstream call per invocation.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;
}

// =============================================================================
// HTTP FETCHER
// =============================================================================

pub struct HttpProductFetcher {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpProductFetcher {
    /// Build a fetcher for the configured catalog backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &CatalogConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;
        Ok(Self { http, endpoint: products_endpoint(&config.api_url) })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ProductSource for HttpProductFetcher {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::ProductStatus { status: status.as_u16() });
        }

        let text = response
            .text()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let products = parse_products(&text)?;
        tracing::debug!(count = products.len(), "fetched products");
        Ok(products)
    }
}

/// `{base}/api/products`, tolerating a trailing slash on `base`.
#[must_use]
pub fn products_endpoint(base: &str) -> String {
    format!("{}/api/products", base.trim_end_matches('/'))
}

/// Parse the backend body as a JSON array of products.
///
/// # Errors
///
/// Returns `FetchError::Decode` if the body is not a product array.
pub fn parse_products(body: &str) -> Result<Vec<Product>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "products_test.rs"]
mod tests;
