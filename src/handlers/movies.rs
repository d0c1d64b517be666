//! Movie CRUD HTTP handlers.
//!
//! This module implements the movie-related API endpoints:
//! - GET /movies - List all movies
//! - POST /movies - Create a new movie
//! - GET /movies/{id} - Get movie by id
//! - PUT /movies/{id} - Overwrite movie by id
//! - DELETE /movies/{id} - Delete movie by id
//!
//! All routes sit behind the Basic Auth middleware. Handlers talk to the
//! injected `MovieStore`, never to a database handle directly.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::movie::{CreateMovieResponse, MessageResponse, Movie, MoviePayload},
    routes::AppState,
};

/// List all movies.
///
/// # Endpoint
///
/// `GET /movies`
///
/// # Response
///
/// - **Success (200 OK)**: JSON array of movies, `[]` when the table is empty
/// - **Error (401)**: Missing or invalid credentials
/// - **Error (500)**: Storage error
///
/// ```json
/// [
///   {
///     "id": 1,
///     "title": "Dune",
///     "releaseyear": "2021",
///     "genre": "SciFi",
///     "director": "Villeneuve",
///     "rating": 8.5,
///     "description": "A mythic hero's journey on Arrakis"
///   }
/// ]
/// ```
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, AppError> {
    let movies = state.store.list().await?;

    Ok(Json(movies))
}

/// Create a new movie.
///
/// # Endpoint
///
/// `POST /movies`
///
/// # Request Body
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
///
/// # Response
///
/// - **Success (201 Created)**: Confirmation message plus the assigned id
/// - **Error (400)**: Body is not a valid movie payload (detail included)
/// - **Error (401)**: Missing or invalid credentials
/// - **Error (500)**: Storage error
///
/// ```json
/// {
///   "message": "movie created successfully",
///   "id": 1
/// }
/// ```
pub async fn create_movie(
    State(state): State<AppState>,
    payload: Result<Json<MoviePayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;

    let id = state.store.insert(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateMovieResponse {
            message: "movie created successfully".to_string(),
            id,
        }),
    ))
}

/// Get a specific movie by id.
///
/// # Endpoint
///
/// `GET /movies/{id}`
///
/// # Response
///
/// - **Success (200 OK)**: The movie record
/// - **Error (400)**: Id segment is not a base-10 integer
/// - **Error (404)**: No movie with that id
/// - **Error (401)**: Missing or invalid credentials
/// - **Error (500)**: Storage error
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, AppError> {
    let id = parse_movie_id(&id)?;

    let movie = state.store.get(id).await?.ok_or(AppError::MovieNotFound)?;

    Ok(Json(movie))
}

/// Overwrite a movie by id.
///
/// # Endpoint
///
/// `PUT /movies/{id}`
///
/// The body has the same shape as create; every field of the addressed row
/// is replaced. The store reports rows affected, so updating an id that
/// does not exist answers 404 rather than silently succeeding.
///
/// # Response
///
/// - **Success (200 OK)**: `{"message": "movie updated successfully"}`
/// - **Error (400)**: Bad id segment or bad body
/// - **Error (404)**: No movie with that id
/// - **Error (401)**: Missing or invalid credentials
/// - **Error (500)**: Storage error
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<MoviePayload>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    // Id validation comes first, matching the routing contract: a bad id is
    // rejected even when the body is also malformed.
    let id = parse_movie_id(&id)?;

    let Json(payload) = payload.map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;

    let updated = state.store.update(id, &payload).await?;
    if updated == 0 {
        return Err(AppError::MovieNotFound);
    }

    Ok(Json(MessageResponse::new("movie updated successfully")))
}

/// Delete a movie by id.
///
/// # Endpoint
///
/// `DELETE /movies/{id}`
///
/// The store reports rows affected, so deleting an id that does not exist
/// answers 404; a repeated delete of the same id is therefore 404, not a
/// silent success.
///
/// # Response
///
/// - **Success (200 OK)**: `{"message": "movie deleted successfully"}`
/// - **Error (400)**: Id segment is not a base-10 integer
/// - **Error (404)**: No movie with that id
/// - **Error (401)**: Missing or invalid credentials
/// - **Error (500)**: Storage error
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_movie_id(&id)?;

    let deleted = state.store.delete(id).await?;
    if deleted == 0 {
        return Err(AppError::MovieNotFound);
    }

    Ok(Json(MessageResponse::new("movie deleted successfully")))
}

/// Handler for `/movies/` with no id segment at all.
///
/// Registered explicitly so the empty segment answers 400 instead of
/// falling through to the router's 404.
pub async fn missing_movie_id() -> AppError {
    AppError::MissingMovieId
}

/// Parse the `{id}` path segment as a base-10 integer.
fn parse_movie_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>().map_err(|_| AppError::InvalidMovieId)
}
