//! Handlers for `/admin/portfolio`.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use folio_core::portfolio::validate_portfolio_item;
use folio_db::models::portfolio::PortfolioInput;
use folio_db::repositories::PortfolioRepo;
use serde::Deserialize;

use super::{parse_id, take_scoped_flash};
use crate::error::AppResult;
use crate::flash::{Flash, FlashScope};
use crate::middleware::auth::AdminUser;
use crate::session::RequestContext;
use crate::state::AppState;
use crate::views;

const PORTFOLIO_PATH: &str = "/admin/portfolio";
const MISSING: &str = "Portfolio item no longer exists.";

/// Form body for creating or updating a portfolio item.
#[derive(Debug, Deserialize)]
pub struct PortfolioForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

impl PortfolioForm {
    fn trimmed(&self) -> PortfolioInput {
        PortfolioInput {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            image: self.image.trim().to_string(),
        }
    }
}

fn echo(input: &PortfolioInput) -> [(&str, &str); 3] {
    [
        ("title", input.title.as_str()),
        ("description", input.description.as_str()),
        ("image", input.image.as_str()),
    ]
}

fn validate(input: &PortfolioInput) -> Result<(), folio_core::error::CoreError> {
    validate_portfolio_item(&input.title, &input.description, &input.image)
}

/// GET /admin/portfolio
pub async fn list(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ctx: RequestContext,
) -> AppResult<Html<String>> {
    let flash = take_scoped_flash(&ctx, &[FlashScope::Portfolio]);
    let items = PortfolioRepo::list(&state.pool).await?;
    Ok(Html(views::admin::portfolio_page(&user, &items, flash.as_ref())))
}

/// POST /admin/portfolio
pub async fn create(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    ctx: RequestContext,
    Form(form): Form<PortfolioForm>,
) -> Redirect {
    let input = form.trimmed();

    if let Err(err) = validate(&input) {
        ctx.set_flash(Flash::error(FlashScope::Portfolio, err.message()).with_form(echo(&input)));
        return Redirect::to(PORTFOLIO_PATH);
    }

    match PortfolioRepo::create(&state.pool, &input).await {
        Ok(id) => {
            tracing::info!(portfolio_id = id, title = %input.title, "Portfolio item created");
            ctx.set_flash(Flash::success(
                FlashScope::Portfolio,
                format!("Portfolio item \"{}\" created successfully.", input.title),
            ));
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create portfolio item");
            ctx.set_flash(
                Flash::error(
                    FlashScope::Portfolio,
                    "Unable to create portfolio item. Please try again.",
                )
                .with_form(echo(&input)),
            );
        }
    }
    Redirect::to(PORTFOLIO_PATH)
}

/// GET /admin/portfolio/{id}/edit
pub async fn edit(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ctx: RequestContext,
    Path(raw_id): Path<String>,
) -> AppResult<Response> {
    let flash = take_scoped_flash(&ctx, &[FlashScope::Portfolio]);

    let item = match parse_id(&raw_id) {
        Some(id) => PortfolioRepo::get(&state.pool, id).await?,
        None => None,
    };

    match item {
        Some(item) => Ok(
            Html(views::admin::portfolio_edit_page(&user, &item, flash.as_ref())).into_response(),
        ),
        None => {
            ctx.set_flash(Flash::error(FlashScope::Portfolio, MISSING));
            Ok(Redirect::to(PORTFOLIO_PATH).into_response())
        }
    }
}

/// POST /admin/portfolio/{id}
pub async fn update(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    ctx: RequestContext,
    Path(raw_id): Path<String>,
    Form(form): Form<PortfolioForm>,
) -> Redirect {
    let Some(id) = parse_id(&raw_id) else {
        ctx.set_flash(Flash::error(FlashScope::Portfolio, MISSING));
        return Redirect::to(PORTFOLIO_PATH);
    };
    let input = form.trimmed();
    let edit_path = format!("{PORTFOLIO_PATH}/{id}/edit");

    if let Err(err) = validate(&input) {
        ctx.set_flash(Flash::error(FlashScope::Portfolio, err.message()).with_form(echo(&input)));
        return Redirect::to(&edit_path);
    }

    match PortfolioRepo::update(&state.pool, id, &input).await {
        Ok(true) => {
            tracing::info!(portfolio_id = id, "Portfolio item updated");
            ctx.set_flash(Flash::success(
                FlashScope::Portfolio,
                format!("Portfolio item \"{}\" updated successfully.", input.title),
            ));
            Redirect::to(PORTFOLIO_PATH)
        }
        Ok(false) => {
            ctx.set_flash(Flash::error(FlashScope::Portfolio, MISSING));
            Redirect::to(PORTFOLIO_PATH)
        }
        Err(e) => {
            tracing::error!(portfolio_id = id, error = %e, "Failed to update portfolio item");
            ctx.set_flash(
                Flash::error(
                    FlashScope::Portfolio,
                    "Unable to update portfolio item. Please try again.",
                )
                .with_form(echo(&input)),
            );
            Redirect::to(&edit_path)
        }
    }
}

/// POST /admin/portfolio/{id}/delete
pub async fn delete(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    ctx: RequestContext,
    Path(raw_id): Path<String>,
) -> Redirect {
    let Some(id) = parse_id(&raw_id) else {
        ctx.set_flash(Flash::error(FlashScope::Portfolio, MISSING));
        return Redirect::to(PORTFOLIO_PATH);
    };
    let flash = match PortfolioRepo::delete(&state.pool, id).await {
        Ok(true) => {
            tracing::info!(portfolio_id = id, "Portfolio item deleted");
            Flash::success(FlashScope::Portfolio, "Portfolio item deleted successfully.")
        }
        Ok(false) => Flash::error(FlashScope::Portfolio, MISSING),
        Err(e) => {
            tracing::error!(portfolio_id = id, error = %e, "Failed to delete portfolio item");
            Flash::error(
                FlashScope::Portfolio,
                "Unable to delete portfolio item. Please try again.",
            )
        }
    };
    ctx.set_flash(flash);
    Redirect::to(PORTFOLIO_PATH)
}
