//! Handlers for `/admin/users`. Accounts are listed and created only.

use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use folio_core::account::{duplicate_username, validate_new_account};
use folio_db::models::user::CreateUser;
use folio_db::repositories::UserRepo;
use serde::Deserialize;

use super::take_scoped_flash;
use crate::auth::password::hash_password;
use crate::error::AppResult;
use crate::flash::{Flash, FlashScope};
use crate::middleware::auth::AdminUser;
use crate::session::RequestContext;
use crate::state::AppState;
use crate::views;

const USERS_PATH: &str = "/admin/users";

/// Form body for `POST /admin/users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// GET /admin/users
pub async fn list(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ctx: RequestContext,
) -> AppResult<Html<String>> {
    let flash = take_scoped_flash(&ctx, &[FlashScope::Users]);
    let users = UserRepo::list(&state.pool).await?;
    Ok(Html(views::admin::users_page(&user, &users, flash.as_ref())))
}

/// POST /admin/users
///
/// The password is never echoed back into the form.
pub async fn create(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    ctx: RequestContext,
    Form(form): Form<CreateUserForm>,
) -> Redirect {
    let username = form.username.trim();
    let echo = [("username", username)];

    if let Err(err) = validate_new_account(username, &form.password) {
        ctx.set_flash(Flash::error(FlashScope::Users, err.message()).with_form(echo));
        return Redirect::to(USERS_PATH);
    }

    let password_hash = match hash_password(&form.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!(error = %e, "Password hashing error");
            ctx.set_flash(
                Flash::error(FlashScope::Users, "Unable to create user. Please try again.")
                    .with_form(echo),
            );
            return Redirect::to(USERS_PATH);
        }
    };

    let input = CreateUser {
        username: username.to_string(),
        password_hash,
    };

    let flash = match UserRepo::create(&state.pool, &input).await {
        Ok(id) => {
            tracing::info!(user_id = id, username = %username, created_by = admin.id, "Admin user created");
            Flash::success(FlashScope::Users, format!("Admin user \"{username}\" created."))
        }
        Err(e) if folio_db::is_unique_violation(&e) => {
            tracing::info!(username = %username, "Admin user not created: username taken");
            Flash::error(FlashScope::Users, duplicate_username().message()).with_form(echo)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create admin user");
            Flash::error(FlashScope::Users, "Unable to create user. Please try again.")
                .with_form(echo)
        }
    };
    ctx.set_flash(flash);
    Redirect::to(USERS_PATH)
}
