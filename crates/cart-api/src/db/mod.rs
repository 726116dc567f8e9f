//! Database operations for the cart `PostgreSQL` store.
//!
//! # Database: `mashauri_cart`
//!
//! The store models one global cart, so the schema is a single table:
//!
//! ## Tables
//!
//! - `cart` - Holds at most one row: the cart document with its `items`
//!   JSONB column. The boolean primary key is fixed to `TRUE`, which makes
//!   a second row structurally impossible.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/cart-api/migrations/` and embedded via
//! `sqlx::migrate!`; they run automatically at server startup.

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

mod cart;

pub use cart::{CartRepository, RepositoryError};

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
