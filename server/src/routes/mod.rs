//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the two JSON collection routes and stitches them with
//! Leptos SSR rendering under a single Axum router. The hydrate bundle is
//! served from `/pkg`.

pub mod catalog;
pub mod storage;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use storefront_client::net::api::{OBJECTS_ENDPOINT, PRODUCTS_ENDPOINT};
use storefront_client::net::types::ErrorBody;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::FetchError;
use crate::state::AppState;

/// JSON routes consumed by the hydrated views.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(PRODUCTS_ENDPOINT, get(catalog::list_products))
        .route(OBJECTS_ENDPOINT, get(storage::list_objects))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full host: API routes + Leptos SSR + static hydrate assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section or `LEPTOS_*` env).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    Ok(app_with_options(state, conf.leptos_options))
}

/// Assemble the host router for already-resolved Leptos options.
///
/// Paths outside the route table fall through to the Leptos file/error
/// handler, which serves site files or renders the app's not-found view.
pub fn app_with_options(state: AppState, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(storefront_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || storefront_client::app::shell(opts.clone())
        })
        .fallback(file_and_error_handler(storefront_client::app::shell))
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// 502 with `{"error": message}`; the message is what the view displays.
pub(crate) fn fetch_error_response(err: &FetchError) -> Response {
    tracing::warn!(error = %err, upstream_status = ?err.upstream_status(), "upstream fetch failed");
    (StatusCode::BAD_GATEWAY, Json(ErrorBody { error: err.to_string() })).into_response()
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
