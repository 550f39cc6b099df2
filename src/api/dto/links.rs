//! DTOs for the administrative links endpoint.

use serde::{Deserialize, Serialize};

/// Request body for creating or overwriting a redirect.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    /// Short code to register.
    pub short: String,
    /// Destination URL the short code resolves to.
    pub long: String,
}

/// Response body for a created redirect.
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    pub short: String,
    pub long: String,
}
