//! Fetch failures shared by both upstream fetchers.
//!
//! `Display` is the user-facing message; route handlers forward it verbatim
//! and the view renders it as `Error: {message}`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The catalog backend answered with a non-success status.
    #[error("Error fetching products")]
    ProductStatus { status: u16 },

    /// The HTTP request could not be sent or its body not read.
    #[error("{0}")]
    Request(String),

    /// The response body was not the expected JSON array.
    #[error("{0}")]
    Decode(String),

    /// The object store rejected the listing or could not be reached.
    #[error("{0}")]
    Storage(String),
}

impl FetchError {
    /// Upstream HTTP status, when the failure was a status rejection.
    #[must_use]
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::ProductStatus { status } => Some(*status),
            Self::Request(_) | Self::Decode(_) | Self::Storage(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
