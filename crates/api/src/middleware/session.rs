//! Session middleware: resolves the signed cookie into a [`RequestContext`]
//! before the handler runs and writes the resulting state back afterwards.

use axum::extract::{Request, State};
use axum::http::header::SET_COOKIE;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

use crate::session::context::ContextOutcome;
use crate::session::{cookie, new_session_id, RequestContext, SessionData};
use crate::state::AppState;

pub async fn session_layer(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let secret = &state.config.session.secret;
    let existing_id = cookie::read_session_cookie(request.headers())
        .and_then(|value| cookie::verify(value, secret));

    let data = match &existing_id {
        Some(id) => state.sessions.load(id).await.unwrap_or_default(),
        None => SessionData::default(),
    };

    let context = RequestContext::new(data);
    request.extensions_mut().insert(context.clone());

    let mut response = next.run(request).await;
    persist(&state, existing_id, context.outcome(), &mut response).await;
    response
}

/// Store the session state left by the handler and issue or clear the cookie.
async fn persist(
    state: &AppState,
    existing_id: Option<String>,
    outcome: ContextOutcome,
    response: &mut Response,
) {
    if !outcome.dirty {
        return;
    }
    let mut existing_id = existing_id;

    if outcome.destroyed {
        if let Some(id) = existing_id.take() {
            state.sessions.remove(&id).await;
            tracing::debug!("Session destroyed");
        }
        if outcome.data.is_empty() {
            append_cookie(response, cookie::clear_cookie());
            return;
        }
    }

    if outcome.data.is_empty() {
        if let Some(id) = existing_id {
            state.sessions.remove(&id).await;
            append_cookie(response, cookie::clear_cookie());
        }
        return;
    }

    match existing_id {
        Some(id) if !outcome.rotate => {
            if !state.sessions.update_if_present(&id, outcome.data).await {
                tracing::debug!("Session ended during the request, changes dropped");
            }
        }
        Some(old_id) => {
            state.sessions.remove(&old_id).await;
            issue_session(state, outcome.data, response).await;
        }
        None => issue_session(state, outcome.data, response).await,
    }
}

/// Store `data` under a fresh id and hand the signed id to the browser.
async fn issue_session(state: &AppState, data: SessionData, response: &mut Response) {
    let id = new_session_id();
    state.sessions.save(id.clone(), data).await;
    let signed = cookie::sign(&id, &state.config.session.secret);
    append_cookie(response, cookie::set_cookie(&signed));
}

fn append_cookie(response: &mut Response, value: String) {
    match HeaderValue::from_str(&value) {
        Ok(header) => {
            response.headers_mut().append(SET_COOKIE, header);
        }
        Err(e) => tracing::error!(error = %e, "Session cookie is not a valid header value"),
    }
}
