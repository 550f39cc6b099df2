//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its destination URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist and 500 on any
/// other store failure.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let long_url = state.store.get(&code).await?;

    debug!(%code, %long_url, "redirecting");

    // 303 See Other, so clients re-resolve on every visit.
    Ok(Redirect::to(&long_url))
}

/// Serves a plain banner for the root path.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> &'static str {
    "URL redirect service"
}
