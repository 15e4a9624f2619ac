//! Request middleware and guard extractors.
//!
//! - [`session::session_layer`] -- loads and persists the per-request session context.
//! - [`auth::AdminUser`] -- requires a signed-in admin, redirecting to the login page otherwise.

pub mod auth;
pub mod session;
