//! Database connection pool and migration management.
//!
//! This module provides utilities for:
//! - Creating and managing a MySQL connection pool
//! - Running database migrations automatically

use sqlx::{MySql, Pool};

/// Type alias for MySQL connection pool.
///
/// Instead of writing `Pool<MySql>` everywhere, we can use `DbPool`.
pub type DbPool = Pool<MySql>;

/// Create a new MySQL connection pool.
///
/// A connection pool maintains multiple database connections that can be reused across HTTP requests which is much more efficient than opening a new connection for each request.
///
/// # Arguments
///
/// * `database_url` - MySQL connection string
///
/// # Errors
///
/// Returns an error if:
/// - Database connection string is invalid
/// - Cannot connect to the MySQL server
/// - Database authentication fails
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    sqlx::mysql::MySqlPoolOptions::new()
        // Limit concurrent connections
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Run database migrations from the `migrations/` directory.
///
/// This function executes all SQL migration files in order. Migrations are tracked in a special `_sqlx_migrations` table, so each migration runs only once.
///
/// # Errors
///
/// Returns an error if migration files cannot be read, contain SQL syntax
/// errors, or fail to execute against the database.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    // The macro reads migrations at compile time from ./migrations directory
    sqlx::migrate!("./migrations").run(pool).await
}
