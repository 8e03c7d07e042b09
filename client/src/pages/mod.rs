//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its fetch lifecycle and delegates rendering details to
//! `components`. `Section` is the static route table the router and the
//! header both read.

pub mod home;
pub mod products;
pub mod storage_objects;


use crate::net::api::{OBJECTS_ENDPOINT, PRODUCTS_ENDPOINT};

/// Top-level routes of the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    Products,
    StorageObjects,
}

impl Section {
    pub const ALL: [Section; 3] = [Self::Home, Self::Products, Self::StorageObjects];

    /// Sections linked from the header, after the brand.
    pub const NAV: [Section; 2] = [Self::Products, Self::StorageObjects];

    /// Router segment (no leading slash).
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::Products => "products",
            Self::StorageObjects => "s3",
        }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Products => "/products",
            Self::StorageObjects => "/s3",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Storefront",
            Self::Products => "Products",
            Self::StorageObjects => "S3 Objects",
        }
    }

    /// Host route the section's page fetches on mount, if any.
    #[must_use]
    pub fn fetch_endpoint(self) -> Option<&'static str> {
        match self {
            Self::Home => None,
            Self::Products => Some(PRODUCTS_ENDPOINT),
            Self::StorageObjects => Some(OBJECTS_ENDPOINT),
        }
    }

    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.path() == path)
    }
}
