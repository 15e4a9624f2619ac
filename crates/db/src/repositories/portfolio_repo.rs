//! Repository for the `portfolio_items` table.

use folio_core::types::DbId;

use crate::models::portfolio::{PortfolioInput, PortfolioItem};
use crate::DbPool;

const COLUMNS: &str = "id, title, description, image, created_at, updated_at";

pub struct PortfolioRepo;

impl PortfolioRepo {
    /// List all portfolio items, newest first.
    pub async fn list(pool: &DbPool) -> Result<Vec<PortfolioItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM portfolio_items ORDER BY id DESC");
        sqlx::query_as::<_, PortfolioItem>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn get(pool: &DbPool, id: DbId) -> Result<Option<PortfolioItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM portfolio_items WHERE id = ?");
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &DbPool, input: &PortfolioInput) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO portfolio_items (title, description, image) VALUES (?, ?, ?) \
             RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.image)
        .fetch_one(pool)
        .await
    }

    /// Replace an item's fields and bump `updated_at`.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &PortfolioInput,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE portfolio_items \
             SET title = ?, description = ?, image = ?, updated_at = CURRENT_TIMESTAMP \
             WHERE id = ?",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.image)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM portfolio_items WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of stored portfolio items.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM portfolio_items")
            .fetch_one(pool)
            .await
    }
}
