use std::fmt;
use std::path::PathBuf;

/// Username seeded when `ADMIN_USER` is unset.
pub const FALLBACK_ADMIN_USER: &str = "admin";
/// Password seeded when `ADMIN_PASS` is unset. Predictable; set `ADMIN_PASS` in production.
pub const FALLBACK_ADMIN_PASS: &str = "admin123";
/// Cookie signing secret used when `SESSION_SECRET` is unset.
pub const FALLBACK_SESSION_SECRET: &str = "change_this_secret";

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite database URL (default: `sqlite://data.sqlite`).
    pub database_url: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory served under `/static` (default: `public`).
    pub static_dir: PathBuf,
    /// Session cookie signing.
    pub session: SessionConfig,
    /// Admin identity created at startup if missing.
    pub admin_seed: AdminSeed,
}

/// Session cookie settings.
#[derive(Clone)]
pub struct SessionConfig {
    /// HMAC key for signing session ids in the cookie.
    pub secret: String,
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Credentials for the admin account seeded at startup.
#[derive(Clone)]
pub struct AdminSeed {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for AdminSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminSeed")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `3000`                  |
    /// | `DATABASE_URL`         | `sqlite://data.sqlite`  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `STATIC_DIR`           | `public`                |
    /// | `SESSION_SECRET`       | `change_this_secret`    |
    /// | `ADMIN_USER`           | `admin`                 |
    /// | `ADMIN_PASS`           | `admin123`              |
    ///
    /// Falling back to the default secret or admin credentials is logged at
    /// `warn` level: those values are public.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data.sqlite".into());

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let static_dir = std::env::var("STATIC_DIR")
            .unwrap_or_else(|_| "public".into())
            .into();

        let secret = env_or_fallback("SESSION_SECRET", FALLBACK_SESSION_SECRET);
        let username = env_or_fallback("ADMIN_USER", FALLBACK_ADMIN_USER);
        let password = env_or_fallback("ADMIN_PASS", FALLBACK_ADMIN_PASS);

        Self {
            host,
            port,
            database_url,
            request_timeout_secs,
            static_dir,
            session: SessionConfig { secret },
            admin_seed: AdminSeed { username, password },
        }
    }
}

fn env_or_fallback(key: &str, fallback: &str) -> String {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => {
            tracing::warn!(var = key, "Not set, using the built-in fallback value");
            fallback.to_string()
        }
    }
}
