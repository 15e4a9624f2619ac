//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument. Every method issues exactly
//! one statement; failures are returned as `sqlx::Error` for the caller to
//! classify.

pub mod contact_link_repo;
pub mod portfolio_repo;
pub mod service_repo;
pub mod settings_repo;
pub mod user_repo;

pub use contact_link_repo::ContactLinkRepo;
pub use portfolio_repo::PortfolioRepo;
pub use service_repo::ServiceRepo;
pub use settings_repo::SettingsRepo;
pub use user_repo::UserRepo;
