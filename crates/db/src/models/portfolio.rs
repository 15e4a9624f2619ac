use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `portfolio_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PortfolioItem {
    pub id: DbId,
    pub title: String,
    pub description: String,
    /// Site-relative path (`/uploads/...`) or absolute `http(s)` URL.
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Full set of editable portfolio fields, used for both create and update.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioInput {
    pub title: String,
    pub description: String,
    pub image: String,
}
