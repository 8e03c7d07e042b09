//! Upstream fetchers used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Each fetcher sits behind an `async_trait` seam so route handlers can be
//! exercised against stubs. Both map every failure to `FetchError`.

pub mod products;
pub mod storage;
