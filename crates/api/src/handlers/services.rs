//! Handlers for `/admin/services`.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use folio_core::service::validate_service;
use folio_core::types::DbId;
use folio_db::models::service::ServiceInput;
use folio_db::repositories::ServiceRepo;
use serde::Deserialize;

use super::{parse_id, take_scoped_flash};
use crate::error::AppResult;
use crate::flash::{Flash, FlashScope};
use crate::middleware::auth::AdminUser;
use crate::session::RequestContext;
use crate::state::AppState;
use crate::views;

const SERVICES_PATH: &str = "/admin/services";
const MISSING: &str = "Service no longer exists.";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Form body for creating or updating a service.
#[derive(Debug, Deserialize)]
pub struct ServiceForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl ServiceForm {
    fn trimmed(&self) -> ServiceInput {
        ServiceInput {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }
}

fn echo(input: &ServiceInput) -> [(&str, &str); 2] {
    [
        ("name", input.name.as_str()),
        ("description", input.description.as_str()),
    ]
}

fn edit_path(id: DbId) -> String {
    format!("{SERVICES_PATH}/{id}/edit")
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /admin/services
pub async fn list(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ctx: RequestContext,
) -> AppResult<Html<String>> {
    let flash = take_scoped_flash(&ctx, &[FlashScope::Services]);
    let services = ServiceRepo::list(&state.pool).await?;
    Ok(Html(views::admin::services_page(
        &user,
        &services,
        flash.as_ref(),
    )))
}

/// POST /admin/services
pub async fn create(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    ctx: RequestContext,
    Form(form): Form<ServiceForm>,
) -> Redirect {
    let input = form.trimmed();

    if let Err(err) = validate_service(&input.name, &input.description) {
        ctx.set_flash(Flash::error(FlashScope::Services, err.message()).with_form(echo(&input)));
        return Redirect::to(SERVICES_PATH);
    }

    match ServiceRepo::create(&state.pool, &input).await {
        Ok(id) => {
            tracing::info!(service_id = id, name = %input.name, "Service created");
            ctx.set_flash(Flash::success(
                FlashScope::Services,
                format!("Service \"{}\" created successfully.", input.name),
            ));
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create service");
            ctx.set_flash(
                Flash::error(FlashScope::Services, "Unable to create service. Please try again.")
                    .with_form(echo(&input)),
            );
        }
    }
    Redirect::to(SERVICES_PATH)
}

/// GET /admin/services/{id}/edit
pub async fn edit(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ctx: RequestContext,
    Path(raw_id): Path<String>,
) -> AppResult<Response> {
    let flash = take_scoped_flash(&ctx, &[FlashScope::Services]);

    let service = match parse_id(&raw_id) {
        Some(id) => ServiceRepo::get(&state.pool, id).await?,
        None => None,
    };
    let Some(service) = service else {
        ctx.set_flash(Flash::error(FlashScope::Services, MISSING));
        return Ok(Redirect::to(SERVICES_PATH).into_response());
    };

    Ok(Html(views::admin::service_edit_page(&user, &service, flash.as_ref())).into_response())
}

/// POST /admin/services/{id}
pub async fn update(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    ctx: RequestContext,
    Path(raw_id): Path<String>,
    Form(form): Form<ServiceForm>,
) -> Redirect {
    let Some(id) = parse_id(&raw_id) else {
        ctx.set_flash(Flash::error(FlashScope::Services, MISSING));
        return Redirect::to(SERVICES_PATH);
    };
    let input = form.trimmed();

    if let Err(err) = validate_service(&input.name, &input.description) {
        ctx.set_flash(Flash::error(FlashScope::Services, err.message()).with_form(echo(&input)));
        return Redirect::to(&edit_path(id));
    }

    match ServiceRepo::update(&state.pool, id, &input).await {
        Ok(true) => {
            tracing::info!(service_id = id, "Service updated");
            ctx.set_flash(Flash::success(
                FlashScope::Services,
                format!("Service \"{}\" updated successfully.", input.name),
            ));
        }
        Ok(false) => ctx.set_flash(Flash::error(FlashScope::Services, MISSING)),
        Err(e) => {
            tracing::error!(service_id = id, error = %e, "Failed to update service");
            ctx.set_flash(
                Flash::error(FlashScope::Services, "Unable to update service. Please try again.")
                    .with_form(echo(&input)),
            );
            return Redirect::to(&edit_path(id));
        }
    }
    Redirect::to(SERVICES_PATH)
}

/// POST /admin/services/{id}/delete
pub async fn delete(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    ctx: RequestContext,
    Path(raw_id): Path<String>,
) -> Redirect {
    let Some(id) = parse_id(&raw_id) else {
        ctx.set_flash(Flash::error(FlashScope::Services, MISSING));
        return Redirect::to(SERVICES_PATH);
    };
    match ServiceRepo::delete(&state.pool, id).await {
        Ok(true) => {
            tracing::info!(service_id = id, "Service deleted");
            ctx.set_flash(Flash::success(
                FlashScope::Services,
                "Service deleted successfully.",
            ));
        }
        Ok(false) => ctx.set_flash(Flash::error(FlashScope::Services, MISSING)),
        Err(e) => {
            tracing::error!(service_id = id, error = %e, "Failed to delete service");
            ctx.set_flash(Flash::error(
                FlashScope::Services,
                "Unable to delete service. Please try again.",
            ));
        }
    }
    Redirect::to(SERVICES_PATH)
}
