//! Singleton contact settings row.

use folio_core::contact::ContactSettings;
use folio_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Primary key of the only row the `settings` table may hold.
pub const SETTINGS_ROW_ID: DbId = 1;

/// The `settings` row as stored. Unset fields are `NULL`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Settings {
    pub id: DbId,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub instagram: Option<String>,
}

impl From<Settings> for ContactSettings {
    fn from(row: Settings) -> Self {
        Self {
            email: row.email,
            phone: row.phone,
            facebook: row.facebook,
            linkedin: row.linkedin,
            github: row.github,
            instagram: row.instagram,
        }
    }
}
