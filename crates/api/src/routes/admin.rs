use axum::response::Redirect;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, dashboard, portfolio, services, settings, users};
use crate::state::AppState;

/// Admin panel routes, mounted under `/admin`.
///
/// Everything except login and logout is guarded by the `AdminUser`
/// extractor in the handlers themselves.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to(auth::DASHBOARD_PATH) }))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/dashboard", get(dashboard::dashboard))
        .route("/services", get(services::list).post(services::create))
        .route("/services/{id}", post(services::update))
        .route("/services/{id}/edit", get(services::edit))
        .route("/services/{id}/delete", post(services::delete))
        .route("/portfolio", get(portfolio::list).post(portfolio::create))
        .route("/portfolio/{id}", post(portfolio::update))
        .route("/portfolio/{id}/edit", get(portfolio::edit))
        .route("/portfolio/{id}/delete", post(portfolio::delete))
        .route("/settings", get(settings::show).post(settings::update))
        .route("/settings/links", post(settings::create_link))
        .route("/settings/links/{id}/delete", post(settings::delete_link))
        .route("/users", get(users::list).post(users::create))
}
