//! Handler for the administrative links endpoint.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;
use tracing::info;

use crate::api::dto::links::{CreateLinkRequest, CreateLinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates or overwrites a redirect mapping.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Errors
///
/// - 400 Bad Request when `short` or `long` is empty
/// - 409 Conflict when the configured backend is read-only
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    if payload.short.is_empty() {
        return Err(AppError::bad_request(
            "Short code must not be empty",
            json!({ "field": "short" }),
        ));
    }
    if payload.long.is_empty() {
        return Err(AppError::bad_request(
            "Destination URL must not be empty",
            json!({ "field": "long" }),
        ));
    }

    state.store.set(&payload.short, &payload.long).await?;

    info!(short = %payload.short, "link created");

    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse {
            short: payload.short,
            long: payload.long,
        }),
    ))
}
