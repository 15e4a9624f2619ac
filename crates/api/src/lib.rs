//! Folio web server library.
//!
//! Exposes the building blocks (config, state, sessions, error handling,
//! routes, views) so integration tests and the binary entrypoint can both
//! access them.

pub mod auth;
pub mod config;
pub mod error;
pub mod flash;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod seed;
pub mod session;
pub mod state;
pub mod views;
