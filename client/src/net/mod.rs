//! Networking modules for the host's JSON routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls and `types` defines the shared wire schema
//! the host also serializes.

pub mod api;
pub mod types;
