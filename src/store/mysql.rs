//! MySQL-backed implementation of the movie store.
//!
//! All statements are parameterized with bound placeholders; user input is
//! never interpolated into SQL text.

use async_trait::async_trait;

use crate::db::DbPool;
use crate::error::AppError;
use crate::models::movie::{Movie, MoviePayload};
use crate::store::MovieStore;

/// Movie store backed by the shared MySQL connection pool.
///
/// Each call acquires a pooled connection for the duration of a single
/// statement and releases it immediately after; there are no
/// multi-statement transactions.
#[derive(Clone)]
pub struct MySqlMovieStore {
    pool: DbPool,
}

impl MySqlMovieStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieStore for MySqlMovieStore {
    async fn list(&self) -> Result<Vec<Movie>, AppError> {
        let movies = sqlx::query_as::<_, Movie>(
            "SELECT id, title, release_year, genre, director, rating, description FROM movies",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(movies)
    }

    async fn insert(&self, movie: &MoviePayload) -> Result<i64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO movies (title, release_year, genre, director, rating, description)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&movie.title)
        .bind(&movie.release_year)
        .bind(&movie.genre)
        .bind(&movie.director)
        .bind(movie.rating)
        .bind(&movie.description)
        .execute(&self.pool)
        .await?;

        // AUTO_INCREMENT id assigned by MySQL for the new row
        Ok(result.last_insert_id() as i64)
    }

    async fn get(&self, id: i64) -> Result<Option<Movie>, AppError> {
        let movie = sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, title, release_year, genre, director, rating, description
            FROM movies
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(movie)
    }

    async fn update(&self, id: i64, movie: &MoviePayload) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE movies
            SET title = ?, release_year = ?, genre = ?, director = ?, rating = ?, description = ?
            WHERE id = ?
            "#,
        )
        .bind(&movie.title)
        .bind(&movie.release_year)
        .bind(&movie.genre)
        .bind(&movie.director)
        .bind(movie.rating)
        .bind(&movie.description)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
