//! Read-only public pages.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use folio_db::repositories::{ContactLinkRepo, PortfolioRepo, ServiceRepo, SettingsRepo};

use crate::error::AppResult;
use crate::state::AppState;
use crate::views;
use crate::views::public::Footer;

/// GET /
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    let pool = &state.pool;
    let (services, portfolio, settings, links) = tokio::try_join!(
        ServiceRepo::list(pool),
        PortfolioRepo::list(pool),
        SettingsRepo::get(pool),
        ContactLinkRepo::list(pool),
    )?;

    let footer = Footer {
        settings: &settings,
        links: &links,
    };
    Ok(Html(views::public::home_page(&services, &portfolio, &footer)))
}

/// GET /about
pub async fn about(State(state): State<AppState>) -> AppResult<Html<String>> {
    let (settings, links) =
        tokio::try_join!(SettingsRepo::get(&state.pool), ContactLinkRepo::list(&state.pool))?;

    let footer = Footer {
        settings: &settings,
        links: &links,
    };
    Ok(Html(views::public::about_page(&footer)))
}

/// GET /services
pub async fn services(State(state): State<AppState>) -> AppResult<Html<String>> {
    let pool = &state.pool;
    let (services, settings, links) = tokio::try_join!(
        ServiceRepo::list(pool),
        SettingsRepo::get(pool),
        ContactLinkRepo::list(pool),
    )?;

    let footer = Footer {
        settings: &settings,
        links: &links,
    };
    Ok(Html(views::public::services_page(&services, &footer)))
}

/// GET /portfolio
pub async fn portfolio(State(state): State<AppState>) -> AppResult<Html<String>> {
    let pool = &state.pool;
    let (items, settings, links) = tokio::try_join!(
        PortfolioRepo::list(pool),
        SettingsRepo::get(pool),
        ContactLinkRepo::list(pool),
    )?;

    let footer = Footer {
        settings: &settings,
        links: &links,
    };
    Ok(Html(views::public::portfolio_page(&items, &footer)))
}

/// GET /contact
pub async fn contact(State(state): State<AppState>) -> AppResult<Html<String>> {
    let (settings, links) =
        tokio::try_join!(SettingsRepo::get(&state.pool), ContactLinkRepo::list(&state.pool))?;

    let footer = Footer {
        settings: &settings,
        links: &links,
    };
    Ok(Html(views::public::contact_page(&footer)))
}

/// Fallback for unknown paths.
pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(views::public::not_found_page()))
}
