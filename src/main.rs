//! Movie Catalog API - Main Application Entry Point
//!
//! A REST API server for managing a catalog of movies. It provides
//! authenticated endpoints for creating, reading, updating, and deleting
//! movie records stored in MySQL.
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Build HTTP router with routes and auth middleware
//! 5. Start server on configured port
//!
//! Any failure during startup is fatal and terminates the process before
//! a single request is served.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use movie_catalog_api::{
    AppState, StaticCredentials, config, create_router, db, store::MySqlMovieStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Create database pool
    let pool = db::create_pool(&config.database_url()).await?;
    tracing::info!("Database pool created");

    // Run migrations
    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    // Wire the handlers' dependencies: MySQL-backed store plus the
    // configured Basic Auth credentials
    let state = AppState::new(
        Arc::new(MySqlMovieStore::new(pool)),
        Arc::new(StaticCredentials::new(
            config.auth_username,
            config.auth_password,
        )),
    );

    let app = create_router(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}
