//! Startup seeding of the admin account.

use folio_db::models::user::CreateUser;
use folio_db::repositories::UserRepo;
use folio_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::AdminSeed;
use crate::error::{AppError, AppResult};

/// Create the configured admin account unless a user with that username
/// already exists.
///
/// Returns `true` when a new account was inserted. An existing account is
/// never modified, so changing `ADMIN_PASS` later does not reset a password.
pub async fn ensure_admin_seeded(pool: &DbPool, seed: &AdminSeed) -> AppResult<bool> {
    if UserRepo::find_by_username(pool, &seed.username)
        .await?
        .is_some()
    {
        tracing::debug!(username = %seed.username, "Admin user already present");
        return Ok(false);
    }

    let password_hash = hash_password(&seed.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let id = UserRepo::create(
        pool,
        &CreateUser {
            username: seed.username.clone(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = id, username = %seed.username, "Seeded default admin user");
    Ok(true)
}
