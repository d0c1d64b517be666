//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur while serving a
/// request. Each variant maps to a specific HTTP status code and error code.
///
/// # Error Categories
///
/// - **Database Errors**: Any sqlx::Error from storage operations
/// - **Authentication Errors**: Missing or invalid Basic Auth credentials
/// - **Resource Errors**: Requested movie not found
/// - **Validation Errors**: Malformed request body or path id
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// This wraps any sqlx::Error using the `#[from]` attribute, which
    /// automatically implements `From<sqlx::Error> for AppError`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Basic Auth header is missing, malformed, or carries wrong credentials.
    ///
    /// Returns HTTP 401 Unauthorized. The message is deliberately generic so
    /// a caller cannot tell which part of the check failed.
    #[error("Unauthorized")]
    Unauthorized,

    /// No movie row matches the requested id.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Movie not found")]
    MovieNotFound,

    /// The `/movies/{id}` path segment was not a base-10 integer.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Invalid movie id")]
    InvalidMovieId,

    /// A `/movies/` request arrived with no id segment at all.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Movie id is required")]
    MissingMovieId,

    /// Request body could not be parsed as a movie payload.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Invalid request")]
    InvalidRequest(String),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `Unauthorized` → 401 Unauthorized
/// - `MovieNotFound` → 404 Not Found
/// - `InvalidMovieId` / `MissingMovieId` / `InvalidRequest` → 400 Bad Request
/// - `Database` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, error code, message)
        let (status, code, message) = match self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized", self.to_string()),
            AppError::MovieNotFound => {
                (StatusCode::NOT_FOUND, "movie_not_found", self.to_string())
            }
            AppError::InvalidMovieId => {
                (StatusCode::BAD_REQUEST, "invalid_movie_id", self.to_string())
            }
            AppError::MissingMovieId => {
                (StatusCode::BAD_REQUEST, "missing_movie_id", self.to_string())
            }
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::Database(ref source) => {
                // Full detail stays server-side; the client only sees a
                // generic message.
                tracing::error!(error = %source, "database operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        // Build JSON response body
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        // Return the response with status code and JSON body
        (status, body).into_response()
    }
}
