use axum::routing::get;
use axum::Router;

use crate::handlers::public;
use crate::state::AppState;

/// Public site pages. No authentication, no mutation.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(public::home))
        .route("/about", get(public::about))
        .route("/services", get(public::services))
        .route("/portfolio", get(public::portfolio))
        .route("/contact", get(public::contact))
}
