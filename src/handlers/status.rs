//! Status endpoint for service monitoring.

use axum::Json;
use serde::Serialize;

/// Status response.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Fixed readiness message
    pub status: String,
}

/// Status handler.
///
/// Always answers 200 without touching storage or requiring
/// authentication, so it doubles as a liveness probe.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "API is up and ready to serve requests"
/// }
/// ```
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "API is up and ready to serve requests".to_string(),
    })
}
