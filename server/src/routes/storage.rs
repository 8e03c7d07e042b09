//! Bucket listing route.

use axum::extract::State;
use axum::response::{IntoResponse, Json, Response};

use super::fetch_error_response;
use crate::state::AppState;

/// `GET /api/storage/objects`: one `ListObjectsV2` per request.
pub async fn list_objects(State(state): State<AppState>) -> Response {
    match state.objects.list_objects().await {
        Ok(objects) => Json(objects).into_response(),
        Err(e) => fetch_error_response(&e),
    }
}
