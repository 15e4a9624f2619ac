use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::views;

/// Application-level error type for HTTP handlers.
///
/// Form rejections never get here: handlers turn them into flash messages.
/// What remains are failures a page cannot recover from. [`IntoResponse`]
/// renders them as a generic HTML error page; details go to the log only.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(err) => tracing::error!(error = %err, "Database error"),
            AppError::InternalError(msg) => tracing::error!(error = %msg, "Internal error"),
        }

        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let page = views::error_page(status, "Something went wrong. Please try again.");
        (status, Html(page)).into_response()
    }
}
