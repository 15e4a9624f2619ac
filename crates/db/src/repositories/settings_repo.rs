//! Repository for the singleton `settings` row.

use folio_core::contact::ContactSettings;

use crate::models::settings::{Settings, SETTINGS_ROW_ID};
use crate::DbPool;

const COLUMNS: &str = "id, email, phone, facebook, linkedin, github, instagram";

pub struct SettingsRepo;

impl SettingsRepo {
    /// The stored row, or `None` if settings were never saved.
    pub async fn find(pool: &DbPool) -> Result<Option<Settings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings WHERE id = ?");
        sqlx::query_as::<_, Settings>(&query)
            .bind(SETTINGS_ROW_ID)
            .fetch_optional(pool)
            .await
    }

    /// Effective settings: the stored row, or the built-in defaults.
    pub async fn get(pool: &DbPool) -> Result<ContactSettings, sqlx::Error> {
        let stored = Self::find(pool).await?;
        Ok(ContactSettings::resolve(stored.map(ContactSettings::from)))
    }

    /// Insert or overwrite the singleton row. Empty values are stored as `NULL`.
    ///
    /// Uses `ON CONFLICT (id) DO UPDATE` so repeated calls with the same
    /// payload leave the row unchanged.
    pub async fn upsert(pool: &DbPool, input: &ContactSettings) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO settings (id, email, phone, facebook, linkedin, github, instagram) \
             VALUES (?, ?, ?, ?, ?, ?, ?) \
             ON CONFLICT (id) DO UPDATE SET \
                 email = excluded.email, \
                 phone = excluded.phone, \
                 facebook = excluded.facebook, \
                 linkedin = excluded.linkedin, \
                 github = excluded.github, \
                 instagram = excluded.instagram",
        )
        .bind(SETTINGS_ROW_ID)
        .bind(null_if_empty(&input.email))
        .bind(null_if_empty(&input.phone))
        .bind(null_if_empty(&input.facebook))
        .bind(null_if_empty(&input.linkedin))
        .bind(null_if_empty(&input.github))
        .bind(null_if_empty(&input.instagram))
        .execute(pool)
        .await?;
        Ok(())
    }
}

fn null_if_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
