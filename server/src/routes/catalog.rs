//! Product list route.

use axum::extract::State;
use axum::response::{IntoResponse, Json, Response};

use super::fetch_error_response;
use crate::state::AppState;

/// `GET /api/catalog/products`: one upstream product fetch per request.
pub async fn list_products(State(state): State<AppState>) -> Response {
    match state.products.fetch_products().await {
        Ok(products) => Json(products).into_response(),
        Err(e) => fetch_error_response(&e),
    }
}
