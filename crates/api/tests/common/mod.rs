//! Shared harness for HTTP-level integration tests.
//!
//! Each test gets its own migrated SQLite file in a temp directory and the
//! same router (middleware stack included) that production uses.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use folio_api::config::{AdminSeed, ServerConfig, SessionConfig};
use folio_api::router::build_app_router;
use folio_api::seed::ensure_admin_seeded;
use folio_api::session::cookie::SESSION_COOKIE;
use folio_api::session::SessionStore;
use folio_api::state::AppState;
use folio_db::DbPool;

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASS: &str = "correct-horse";

/// A running test application. The temp directory is removed on drop.
pub struct TestApp {
    _dir: TempDir,
    pub router: Router,
    pub pool: DbPool,
    /// The state behind `router`, for tests that assemble their own routes.
    pub state: AppState,
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(dir: &TempDir) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: format!("sqlite://{}", dir.path().join("test.sqlite").display()),
        request_timeout_secs: 30,
        static_dir: dir.path().join("public"),
        session: SessionConfig {
            secret: "test-session-secret".to_string(),
        },
        admin_seed: AdminSeed {
            username: ADMIN_USER.to_string(),
            password: ADMIN_PASS.to_string(),
        },
    }
}

/// Open a migrated database, seed the admin account and build the router.
pub async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = test_config(&dir);

    let pool = folio_db::create_pool(&config.database_url)
        .await
        .expect("pool");
    folio_db::run_migrations(&pool).await.expect("migrations");
    ensure_admin_seeded(&pool, &config.admin_seed)
        .await
        .expect("seed admin");

    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config),
        sessions: SessionStore::new(),
    };

    TestApp {
        _dir: dir,
        router: build_app_router(state.clone()),
        pool,
        state,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Build a GET request, optionally with a session cookie.
pub fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

/// Build a url-encoded form POST, optionally with a session cookie.
pub fn form_request(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Send a GET request, optionally with a session cookie.
pub async fn get(app: &TestApp, uri: &str, cookie: Option<&str>) -> Response {
    let request = get_request(uri, cookie);
    app.router.clone().oneshot(request).await.unwrap()
}

/// Send a url-encoded form POST, optionally with a session cookie.
pub async fn post_form(app: &TestApp, uri: &str, body: &str, cookie: Option<&str>) -> Response {
    let request = form_request(uri, body, cookie);
    app.router.clone().oneshot(request).await.unwrap()
}

/// Collect the response body as UTF-8 text.
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Parse the response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `Location` header of a redirect.
pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(LOCATION)
        .expect("redirect must carry a Location header")
        .to_str()
        .unwrap()
}

/// The `name=value` pair of the session cookie set by this response, if any.
pub fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter(|value| value.starts_with(&format!("{SESSION_COOKIE}=")))
        .map(|value| value.split(';').next().unwrap_or_default().to_string())
        .next()
}

/// Assert a `303 See Other` to `target`.
pub fn assert_redirect(response: &Response, target: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(response), target);
}

/// Sign in as the seeded admin and return the session cookie.
pub async fn login(app: &TestApp) -> String {
    login_as(app, ADMIN_USER, ADMIN_PASS).await
}

pub async fn login_as(app: &TestApp, username: &str, password: &str) -> String {
    let body = format!("username={username}&password={password}");
    let response = post_form(app, "/admin/login", &body, None).await;
    assert_redirect(&response, "/admin/dashboard");
    session_cookie(&response).expect("login must set a session cookie")
}
