//! Repository for the `services` table.

use folio_core::types::DbId;

use crate::models::service::{Service, ServiceInput};
use crate::DbPool;

const COLUMNS: &str = "id, name, description, created_at, updated_at";

pub struct ServiceRepo;

impl ServiceRepo {
    /// List all services, newest first.
    pub async fn list(pool: &DbPool) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services ORDER BY id DESC");
        sqlx::query_as::<_, Service>(&query).fetch_all(pool).await
    }

    pub async fn get(pool: &DbPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE id = ?");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new service, returning its id.
    pub async fn create(pool: &DbPool, input: &ServiceInput) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar("INSERT INTO services (name, description) VALUES (?, ?) RETURNING id")
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Replace a service's fields and bump `updated_at`.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn update(pool: &DbPool, id: DbId, input: &ServiceInput) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE services SET name = ?, description = ?, updated_at = CURRENT_TIMESTAMP \
             WHERE id = ?",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a service. Returns `false` if nothing was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM services WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of stored services.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM services")
            .fetch_one(pool)
            .await
    }
}
