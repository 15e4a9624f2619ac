//! Admin authentication gate.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::Redirect;

use crate::session::{RequestContext, SessionUser};
use crate::state::AppState;

/// Where unauthenticated admin requests are sent.
pub const LOGIN_PATH: &str = "/admin/login";

/// The signed-in admin, extracted from the session.
///
/// Use this as an extractor parameter in every admin handler. Anonymous
/// requests are redirected to [`LOGIN_PATH`] without any message:
///
/// ```ignore
/// async fn dashboard(AdminUser(user): AdminUser) -> Html<String> {
///     Html(format!("Welcome, {}", user.username))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminUser(pub SessionUser);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let context = RequestContext::from_request_parts(parts, state)
            .await
            .map_err(|_| Redirect::to(LOGIN_PATH))?;

        match context.identity() {
            Some(user) => Ok(AdminUser(user)),
            None => {
                tracing::debug!(path = %parts.uri.path(), "Anonymous admin request redirected to login");
                Err(Redirect::to(LOGIN_PATH))
            }
        }
    }
}
