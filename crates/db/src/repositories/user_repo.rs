//! Repository for the `users` table.

use folio_core::types::DbId;

use crate::models::user::{CreateUser, User, UserSummary};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, password_hash, created_at";

/// Users are created and listed only; there is no update or delete.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning its id.
    ///
    /// Fails with a unique violation when the username is taken
    /// (see [`crate::is_unique_violation`]).
    pub async fn create(pool: &DbPool, input: &CreateUser) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar("INSERT INTO users (username, password_hash) VALUES (?, ?) RETURNING id")
            .bind(&input.username)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &DbPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = ?");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// List all users, oldest first, without password hashes.
    pub async fn list(pool: &DbPool) -> Result<Vec<UserSummary>, sqlx::Error> {
        sqlx::query_as::<_, UserSummary>(
            "SELECT id, username, created_at FROM users ORDER BY id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Number of stored admin users.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
    }
}
