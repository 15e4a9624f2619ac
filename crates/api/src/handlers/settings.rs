//! Handlers for `/admin/settings`: the contact settings singleton and the
//! custom contact links listed beneath it.

use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;
use folio_core::contact::{validate_contact_link, ContactSettings};
use folio_db::models::contact_link::CreateContactLink;
use folio_db::repositories::{ContactLinkRepo, SettingsRepo};
use serde::Deserialize;

use super::{parse_id, take_scoped_flash};
use crate::error::AppResult;
use crate::flash::{Flash, FlashScope};
use crate::middleware::auth::AdminUser;
use crate::session::RequestContext;
use crate::state::AppState;
use crate::views;
use crate::views::admin::SettingsView;

const SETTINGS_PATH: &str = "/admin/settings";
const LINKS_ANCHOR_PATH: &str = "/admin/settings#custom-links";
const LINK_MISSING: &str = "Contact link no longer exists.";

/// Form body for `POST /admin/settings`.
#[derive(Debug, Deserialize)]
pub struct SettingsForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub instagram: String,
}

impl SettingsForm {
    fn echo(&self) -> [(&str, &str); 6] {
        [
            ("email", self.email.trim()),
            ("phone", self.phone.trim()),
            ("facebook", self.facebook.trim()),
            ("linkedin", self.linkedin.trim()),
            ("github", self.github.trim()),
            ("instagram", self.instagram.trim()),
        ]
    }
}

/// Form body for `POST /admin/settings/links`.
#[derive(Debug, Deserialize)]
pub struct ContactLinkForm {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub icon: String,
}

/// GET /admin/settings
pub async fn show(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ctx: RequestContext,
) -> AppResult<Html<String>> {
    let flash = take_scoped_flash(&ctx, &[FlashScope::Settings, FlashScope::ContactLinks]);

    let (current, links) =
        tokio::try_join!(SettingsRepo::get(&state.pool), ContactLinkRepo::list(&state.pool))?;

    let echo_for = |scope: FlashScope| flash.as_ref().filter(|f| f.scope == scope && f.has_form());
    let view = SettingsView {
        current: &current,
        links: &links,
        flash: flash.as_ref(),
        settings_echo: echo_for(FlashScope::Settings),
        link_echo: echo_for(FlashScope::ContactLinks),
    };
    Ok(Html(views::admin::settings_page(&user, &view)))
}

/// POST /admin/settings
pub async fn update(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    ctx: RequestContext,
    Form(form): Form<SettingsForm>,
) -> Redirect {
    let settings = ContactSettings::from_form(
        &form.email,
        &form.phone,
        &form.facebook,
        &form.linkedin,
        &form.github,
        &form.instagram,
    );

    if let Err(err) = settings.validate() {
        ctx.set_flash(Flash::error(FlashScope::Settings, err.message()).with_form(form.echo()));
        return Redirect::to(SETTINGS_PATH);
    }

    match SettingsRepo::upsert(&state.pool, &settings).await {
        Ok(()) => {
            tracing::info!("Contact settings updated");
            ctx.set_flash(Flash::success(
                FlashScope::Settings,
                "Contact and social settings updated successfully.",
            ));
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to save contact settings");
            ctx.set_flash(
                Flash::error(
                    FlashScope::Settings,
                    "Unable to save settings. Please try again.",
                )
                .with_form(form.echo()),
            );
        }
    }
    Redirect::to(SETTINGS_PATH)
}

/// POST /admin/settings/links
pub async fn create_link(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    ctx: RequestContext,
    Form(form): Form<ContactLinkForm>,
) -> Redirect {
    let input = CreateContactLink {
        label: form.label.trim().to_string(),
        url: form.url.trim().to_string(),
        icon: form.icon.trim().to_string(),
    };
    let echo = [
        ("label", input.label.as_str()),
        ("url", input.url.as_str()),
        ("icon", input.icon.as_str()),
    ];

    if let Err(err) = validate_contact_link(&input.label, &input.url) {
        ctx.set_flash(Flash::error(FlashScope::ContactLinks, err.message()).with_form(echo));
        return Redirect::to(LINKS_ANCHOR_PATH);
    }

    match ContactLinkRepo::create(&state.pool, &input).await {
        Ok(id) => {
            tracing::info!(link_id = id, label = %input.label, "Contact link created");
            ctx.set_flash(Flash::success(
                FlashScope::ContactLinks,
                format!("Added custom contact link \"{}\".", input.label),
            ));
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create contact link");
            ctx.set_flash(
                Flash::error(
                    FlashScope::ContactLinks,
                    "Unable to add contact link. Please try again.",
                )
                .with_form(echo),
            );
        }
    }
    Redirect::to(LINKS_ANCHOR_PATH)
}

/// POST /admin/settings/links/{id}/delete
pub async fn delete_link(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    ctx: RequestContext,
    Path(raw_id): Path<String>,
) -> Redirect {
    let Some(id) = parse_id(&raw_id) else {
        ctx.set_flash(Flash::error(FlashScope::ContactLinks, LINK_MISSING));
        return Redirect::to(LINKS_ANCHOR_PATH);
    };

    let flash = match ContactLinkRepo::delete(&state.pool, id).await {
        Ok(true) => {
            tracing::info!(link_id = id, "Contact link removed");
            Flash::success(FlashScope::ContactLinks, "Removed custom contact link.")
        }
        Ok(false) => Flash::error(FlashScope::ContactLinks, LINK_MISSING),
        Err(e) => {
            tracing::error!(link_id = id, error = %e, "Failed to remove contact link");
            Flash::error(
                FlashScope::ContactLinks,
                "Unable to remove contact link. Please try again.",
            )
        }
    };
    ctx.set_flash(flash);
    Redirect::to(LINKS_ANCHOR_PATH)
}
