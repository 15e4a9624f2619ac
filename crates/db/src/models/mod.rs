//! Row structs and input DTOs, one submodule per table.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! table row and the DTO its repository accepts for writes.

pub mod contact_link;
pub mod portfolio;
pub mod service;
pub mod settings;
pub mod user;
