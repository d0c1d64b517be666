//! # Movie Catalog API
//!
//! A REST API server exposing CRUD operations over a single `movies`
//! table, gated by HTTP Basic Authentication.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: MySQL with sqlx (async queries)
//! - **Authentication**: HTTP Basic Auth against configured static credentials
//! - **Format**: JSON requests/responses
//!
//! The HTTP layer depends on two injected capabilities: a [`MovieStore`]
//! for persistence and a [`CredentialVerifier`] for authentication. Tests
//! assemble the router with in-memory substitutes via [`create_router`].

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use error::AppError;
pub use middleware::auth::{CredentialVerifier, StaticCredentials};
pub use models::movie::{Movie, MoviePayload};
pub use routes::{AppState, create_router};
pub use store::{MovieStore, MySqlMovieStore};
