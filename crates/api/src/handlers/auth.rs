//! Admin login and logout.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use folio_db::repositories::UserRepo;
use serde::Deserialize;

use crate::auth::password::verify_password;
use crate::middleware::auth::LOGIN_PATH;
use crate::session::{RequestContext, SessionUser};
use crate::state::AppState;
use crate::views;

/// Landing page after a successful login.
pub const DASHBOARD_PATH: &str = "/admin/dashboard";

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Form body for `POST /admin/login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// GET /admin/login
pub async fn login_form(ctx: RequestContext) -> Response {
    if ctx.is_authenticated() {
        return Redirect::to(DASHBOARD_PATH).into_response();
    }
    Html(views::admin::login_page(None)).into_response()
}

/// POST /admin/login
///
/// Unknown usernames and wrong passwords get the same response.
pub async fn login(
    State(state): State<AppState>,
    ctx: RequestContext,
    Form(form): Form<LoginForm>,
) -> Response {
    let username = form.username.trim();

    let user = match UserRepo::find_by_username(&state.pool, username).await {
        Ok(user) => user,
        Err(e) => {
            tracing::error!(error = %e, "Failed to look up user during login");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(views::admin::login_page(Some(
                    "Unable to sign in right now. Please try again.",
                ))),
            )
                .into_response();
        }
    };

    let Some(user) = user else {
        tracing::info!(username = %username, "Login failed: unknown user");
        return Html(views::admin::login_page(Some(INVALID_CREDENTIALS))).into_response();
    };

    let verified = verify_password(&form.password, &user.password_hash).unwrap_or_else(|e| {
        tracing::error!(user_id = user.id, error = %e, "Stored password hash is unreadable");
        false
    });
    if !verified {
        tracing::info!(user_id = user.id, "Login failed: wrong password");
        return Html(views::admin::login_page(Some(INVALID_CREDENTIALS))).into_response();
    }

    tracing::info!(user_id = user.id, username = %user.username, "Admin signed in");
    ctx.sign_in(SessionUser {
        id: user.id,
        username: user.username,
    });
    Redirect::to(DASHBOARD_PATH).into_response()
}

/// POST /admin/logout
pub async fn logout(ctx: RequestContext) -> Redirect {
    if let Some(user) = ctx.identity() {
        tracing::info!(user_id = user.id, "Admin signed out");
    }
    ctx.sign_out();
    Redirect::to(LOGIN_PATH)
}
