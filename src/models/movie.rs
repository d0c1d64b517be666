//! Movie data models and API request/response types.
//!
//! This module defines:
//! - `Movie`: Database entity representing a movie row
//! - `MoviePayload`: Request body for creating and updating movies
//! - `CreateMovieResponse` / `MessageResponse`: Confirmation bodies

use serde::{Deserialize, Serialize};

/// Represents a movie record from the database.
///
/// # Database Table
///
/// Maps to the `movies` table. The `id` is assigned by MySQL on insert
/// (AUTO_INCREMENT) and never changes afterwards.
///
/// # Wire Format
///
/// The release year travels as `releaseyear` on the wire while the column
/// is named `release_year`; the serde rename keeps both sides stable. It is
/// stored as text, not a numeric year.
///
/// ```json
/// {
///   "id": 1,
///   "title": "Dune",
///   "releaseyear": "2021",
///   "genre": "SciFi",
///   "director": "Villeneuve",
///   "rating": 8.5,
///   "description": "A mythic hero's journey on Arrakis"
/// }
/// ```
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Movie {
    /// Unique identifier, assigned by the storage layer
    pub id: i64,

    /// Movie title
    pub title: String,

    /// Release year, stored as text
    #[serde(rename = "releaseyear")]
    pub release_year: String,

    /// Genre label
    pub genre: String,

    /// Director name
    pub director: String,

    /// Rating as a floating-point number
    pub rating: f64,

    /// Free-form description
    pub description: String,
}

/// Request body for creating or updating a movie.
///
/// The same shape is used for both operations: an update overwrites every
/// field of the addressed row, partial updates are not supported.
///
/// # JSON Example
///
/// ```json
/// {
///   "title": "Dune",
///   "releaseyear": "2021",
///   "genre": "SciFi",
///   "director": "Villeneuve",
///   "rating": 8.5,
///   "description": "A mythic hero's journey on Arrakis"
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct MoviePayload {
    /// Movie title
    pub title: String,

    /// Release year, free-form text
    #[serde(rename = "releaseyear")]
    pub release_year: String,

    /// Genre label
    pub genre: String,

    /// Director name
    pub director: String,

    /// Rating as a floating-point number
    pub rating: f64,

    /// Free-form description
    pub description: String,
}

/// Response body for a successful create.
///
/// Carries the generated id so callers can read the record back.
#[derive(Debug, Serialize)]
pub struct CreateMovieResponse {
    /// Human-readable confirmation
    pub message: String,

    /// Identifier assigned to the new movie
    pub id: i64,
}

/// Confirmation body for update and delete operations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
