use axum::extract::State;
use axum::response::Html;
use folio_db::repositories::{ContactLinkRepo, PortfolioRepo, ServiceRepo, UserRepo};

use crate::error::AppResult;
use crate::middleware::auth::AdminUser;
use crate::session::RequestContext;
use crate::state::AppState;
use crate::views;
use crate::views::admin::DashboardCounts;

/// GET /admin/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ctx: RequestContext,
) -> AppResult<Html<String>> {
    // The dashboard shows no flash, but an admin page view still consumes it.
    let _ = ctx.take_flash();

    let pool = &state.pool;
    let (services, portfolio, contact_links, users) = tokio::try_join!(
        ServiceRepo::count(pool),
        PortfolioRepo::count(pool),
        ContactLinkRepo::count(pool),
        UserRepo::count(pool),
    )?;

    let counts = DashboardCounts {
        services,
        portfolio,
        contact_links,
        users,
    };
    Ok(Html(views::admin::dashboard_page(&user, &counts)))
}
