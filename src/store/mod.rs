//! Storage abstraction for movie records.
//!
//! Handlers talk to a [`MovieStore`] rather than to a database handle
//! directly, so the HTTP layer can be exercised against an in-memory
//! implementation in tests while production uses [`MySqlMovieStore`].

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::movie::{Movie, MoviePayload};

mod mysql;

pub use mysql::MySqlMovieStore;

/// Capability interface over the `movies` table.
///
/// Every method performs exactly one statement against the backing store.
/// `update` and `delete` report the number of rows affected so callers can
/// distinguish a hit from a miss.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Fetch all movies in storage default order.
    async fn list(&self) -> Result<Vec<Movie>, AppError>;

    /// Insert a new movie and return the id assigned by the store.
    async fn insert(&self, movie: &MoviePayload) -> Result<i64, AppError>;

    /// Fetch a single movie by id, or `None` when no row matches.
    async fn get(&self, id: i64) -> Result<Option<Movie>, AppError>;

    /// Overwrite every field of the movie with the given id.
    ///
    /// Returns the number of rows affected (0 when the id does not exist).
    async fn update(&self, id: i64, movie: &MoviePayload) -> Result<u64, AppError>;

    /// Delete the movie with the given id.
    ///
    /// Returns the number of rows affected (0 when the id does not exist).
    async fn delete(&self, id: i64) -> Result<u64, AppError>;
}
