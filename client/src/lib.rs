//! # storefront-client
//!
//! Leptos + WASM frontend for the storefront viewer: a navigation shell over
//! two read-only views, the catalog's products and a bucket listing.
//!
//! This crate contains the app shell, pages, presentation components, view
//! state, and the REST helpers that talk to the host's JSON routes.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point invoked by the hydration bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
