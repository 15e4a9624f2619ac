use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `contact_links` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactLink {
    pub id: DbId,
    pub label: String,
    pub url: String,
    /// Icon class, e.g. `fa-solid fa-link`.
    pub icon: String,
    pub created_at: Timestamp,
}

/// DTO for creating a contact link. A blank `icon` is stored as the default icon.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContactLink {
    pub label: String,
    pub url: String,
    pub icon: String,
}
