//! Cart repository for the single shared cart document.
//!
//! The client always sends the full cart, never a delta, so `replace` is a
//! wholesale upsert. There is no concurrency control: concurrent writers
//! race and the last write wins.

use mashauri_core::LineItem;
use sqlx::PgPool;
use thiserror::Error;

/// Errors from cart store operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The stored `items` document does not deserialize as line items.
    #[error("corrupt cart document: {0}")]
    DataCorruption(#[from] serde_json::Error),
}

/// Repository for cart database operations.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Read the cart contents.
    ///
    /// Returns an empty sequence when no cart document exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored document is
    /// not a valid line item sequence.
    pub async fn read(&self) -> Result<Vec<LineItem>, RepositoryError> {
        let row: Option<serde_json::Value> = sqlx::query_scalar("SELECT items FROM cart")
            .fetch_optional(self.pool)
            .await?;

        match row {
            Some(items) => Ok(serde_json::from_value(items)?),
            None => Ok(Vec::new()),
        }
    }

    /// Create-or-overwrite the single cart document with the full item list.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the write fails.
    pub async fn replace(&self, items: &[LineItem]) -> Result<(), RepositoryError> {
        let items = serde_json::to_value(items)?;
        sqlx::query(
            r"
            INSERT INTO cart (id, items)
            VALUES (TRUE, $1)
            ON CONFLICT (id) DO UPDATE
            SET items = EXCLUDED.items, updated_at = now()
            ",
        )
        .bind(items)
        .execute(self.pool)
        .await?;
        Ok(())
    }

    /// Delete the cart document.
    ///
    /// Succeeds whether or not a cart exists; a subsequent `read` returns
    /// an empty sequence either way.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn clear(&self) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM cart").execute(self.pool).await?;
        Ok(())
    }
}
