//! Shared wire DTOs for the browser/host boundary.
//!
//! DESIGN
//! ======
//! The host re-serializes upstream records with the same field names it
//! received, so the browser and the host parse one schema. Only the fields
//! the views project are modeled; unknown upstream fields are dropped.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Product identifier as sent by the catalog backend.
///
/// Backends disagree on numeric vs. string keys, so both are accepted and
/// rendered verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A catalog product as returned by `GET {API_URL}/api/products`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(rename = "priceWithTax")]
    pub price_with_tax: f64,
}

/// One entry of a bucket listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageObject {
    /// Object key within the bucket.
    #[serde(default)]
    pub key: String,
    /// Object size in bytes.
    #[serde(default)]
    pub size: i64,
}

/// Failure body returned by the host JSON routes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
