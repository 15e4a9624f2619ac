pub mod admin;
pub mod health;
pub mod public;

use axum::Router;

use crate::state::AppState;

/// Build the page route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                         home
/// /about /services /portfolio /contact      public pages
///
/// /admin/login                              login form, sign in (public)
/// /admin/logout                             sign out (POST)
/// /admin/dashboard                          overview (admin)
/// /admin/services                           list, create
/// /admin/services/{id}/edit                 edit form
/// /admin/services/{id}                      update (POST)
/// /admin/services/{id}/delete               delete (POST)
/// /admin/portfolio                          list, create
/// /admin/portfolio/{id}/edit                edit form
/// /admin/portfolio/{id}                     update (POST)
/// /admin/portfolio/{id}/delete              delete (POST)
/// /admin/settings                           show, upsert
/// /admin/settings/links                     add link (POST)
/// /admin/settings/links/{id}/delete         remove link (POST)
/// /admin/users                              list, create
/// ```
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .merge(public::router())
        .nest("/admin", admin::router())
}
