//! Domain types, validation rules and defaults for the Folio site.
//!
//! Pure logic only: nothing in this crate touches the database or HTTP.

pub mod account;
pub mod contact;
pub mod error;
pub mod portfolio;
pub mod service;
pub mod types;
pub mod validation;
