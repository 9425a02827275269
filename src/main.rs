//! Account Service - Main Application Entry Point
//!
//! A REST API server managing a single kind of record, the account. Accounts
//! can be created, listed, fetched, renamed and deleted. Creating an account
//! issues a signed token that must accompany every request to that account.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx, behind the `AccountStore` trait
//! - **Authentication**: HS256 JWT in the `x-auth` header
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Probe the database and create the accounts table if needed
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port
//!
//! Any failure before step 5 terminates the process.

mod config;
mod db;
mod error;
mod handlers;
mod middleware;
mod models;
mod routes;
mod services;
mod state;
mod store;

use tracing_subscriber::EnvFilter;

use crate::{
    services::token_service::TokenService,
    state::AppState,
    store::{AccountStore, postgres::PgAccountStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env()?;
    tracing::info!(?config, "Configuration loaded");

    let pool = db::create_pool(&config.database_url, config.db_max_connections).await?;
    tracing::info!("Database pool created");

    let store = PgAccountStore::new(pool);
    store.ping().await?;
    store.init().await?;
    tracing::info!("Accounts table ready");

    let state = AppState::new(store, TokenService::new(config.secret_key.as_bytes()));
    let app = routes::router(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
