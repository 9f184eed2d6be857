//! Events API - /event
//!
//! POST /event/shift-missing - find a replacement for an uncovered shift

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use autoops_core::{AppState, CoverageResult, ServerError, ShiftMissingEvent};

pub fn router() -> Router<AppState> {
    Router::new().route("/shift-missing", post(handle_shift_missing))
}

/// Body errors (bad JSON, non-object bodies, missing or mistyped fields) are
/// reported as 400 validation errors rather than axum's default 422.
async fn handle_shift_missing(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<CoverageResult>, ServerError> {
    let Json(body) =
        payload.map_err(|rejection| ServerError::Validation(rejection.body_text()))?;
    let event = ShiftMissingEvent::from_json(body)?;

    let result = state.gateway.submit(&event).await?;
    Ok(Json(result))
}
