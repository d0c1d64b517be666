//! Router assembly and shared application state.
//!
//! # Route Structure
//!
//! ```text
//! GET  /status          - Readiness check (public)
//! GET  /movies          - List movies (protected)
//! POST /movies          - Create movie (protected)
//! GET  /movies/{id}     - Get movie by id (protected)
//! PUT  /movies/{id}     - Update movie by id (protected)
//! DELETE /movies/{id}   - Delete movie by id (protected)
//! ```
//!
//! Unsupported methods on matched paths answer 405 via axum's method
//! routing; `/movies/` with no id answers 400 through an explicit route.

use std::sync::Arc;

use axum::{
    Router, middleware as axum_middleware,
    routing::{any, get},
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{movies, status},
    middleware::auth::{self, CredentialVerifier},
    store::MovieStore,
};

/// Dependencies shared by every handler.
///
/// The store and the credential verifier are constructor-injected here
/// instead of living in process-wide state, so tests can assemble the
/// router around an in-memory store and fixed test credentials.
#[derive(Clone)]
pub struct AppState {
    /// Storage capability for movie records
    pub store: Arc<dyn MovieStore>,

    /// Credential check used by the Basic Auth middleware
    pub verifier: Arc<dyn CredentialVerifier>,
}

impl AppState {
    pub fn new(store: Arc<dyn MovieStore>, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { store, verifier }
    }
}

/// Build the application router.
///
/// The movie routes are grouped and wrapped with the Basic Auth
/// middleware; the status route stays public. Request tracing covers the
/// whole router.
pub fn create_router(state: AppState) -> Router {
    // Protected movie routes; auth middleware runs before every handler
    // in this group
    let movie_routes = Router::new()
        .route(
            "/movies",
            get(movies::list_movies).post(movies::create_movie),
        )
        // An empty id segment is a client error, not an unknown route
        .route("/movies/", any(movies::missing_movie_id))
        .route(
            "/movies/{id}",
            get(movies::get_movie)
                .put(movies::update_movie)
                .delete(movies::delete_movie),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth::basic_auth,
        ));

    Router::new()
        // Public route (no authentication required)
        .route("/status", get(status::status))
        .merge(movie_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
