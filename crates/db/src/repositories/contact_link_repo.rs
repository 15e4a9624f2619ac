//! Repository for the `contact_links` table.

use folio_core::contact::link_icon_or_default;
use folio_core::types::DbId;

use crate::models::contact_link::{ContactLink, CreateContactLink};
use crate::DbPool;

const COLUMNS: &str = "id, label, url, icon, created_at";

/// Contact links are created and deleted only; there is no update.
pub struct ContactLinkRepo;

impl ContactLinkRepo {
    /// List all links in creation order.
    pub async fn list(pool: &DbPool) -> Result<Vec<ContactLink>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_links ORDER BY id ASC");
        sqlx::query_as::<_, ContactLink>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn create(pool: &DbPool, input: &CreateContactLink) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar("INSERT INTO contact_links (label, url, icon) VALUES (?, ?, ?) RETURNING id")
            .bind(&input.label)
            .bind(&input.url)
            .bind(link_icon_or_default(&input.icon))
            .fetch_one(pool)
            .await
    }

    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contact_links WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of stored contact links.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM contact_links")
            .fetch_one(pool)
            .await
    }
}
