//! Request handlers.
//!
//! Admin handlers follow one shape: trim the submitted form, validate it,
//! call the repository, flash the outcome and redirect with `303 See Other`.
//! Page handlers consume the pending flash and render HTML.

pub mod auth;
pub mod dashboard;
pub mod portfolio;
pub mod public;
pub mod services;
pub mod settings;
pub mod users;

use folio_core::types::DbId;

use crate::flash::{Flash, FlashScope};
use crate::session::RequestContext;

/// Consume the pending flash, keeping it only when it belongs to one of `scopes`.
pub(crate) fn take_scoped_flash(ctx: &RequestContext, scopes: &[FlashScope]) -> Option<Flash> {
    ctx.take_flash().filter(|flash| scopes.contains(&flash.scope))
}

/// Parse a record id taken from the path.
///
/// Anything that is not a valid `i64` cannot name a row, so it is treated
/// like an id that no longer exists.
pub(crate) fn parse_id(raw: &str) -> Option<DbId> {
    raw.parse().ok()
}
