//! Per-request view of the session: the optional signed-in admin and the
//! pending flash message.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::{SessionData, SessionUser};
use crate::error::AppError;
use crate::flash::Flash;

/// Session state for the current request, passed to handlers as an extractor.
///
/// Cloning shares the same underlying state; the session middleware keeps one
/// clone and reads the final state back once the handler has returned.
#[derive(Clone, Default)]
pub struct RequestContext {
    inner: Arc<Mutex<ContextState>>,
}

#[derive(Default)]
struct ContextState {
    data: SessionData,
    destroyed: bool,
    rotate: bool,
    dirty: bool,
}

/// What the session middleware must persist after the handler ran.
#[derive(Debug, Default)]
pub struct ContextOutcome {
    pub data: SessionData,
    /// The previous session must be dropped (logout).
    pub destroyed: bool,
    /// The session must move to a fresh id (login).
    pub rotate: bool,
    /// Something changed during the request. A clean context writes nothing
    /// back, so concurrent requests cannot overwrite each other's changes.
    pub dirty: bool,
}

impl RequestContext {
    pub fn new(data: SessionData) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ContextState {
                data,
                ..ContextState::default()
            })),
        }
    }

    fn state(&self) -> MutexGuard<'_, ContextState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn identity(&self) -> Option<SessionUser> {
        self.state().data.user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().data.user.is_some()
    }

    /// Bind `user` to the session. The session id is rotated on the way out.
    pub fn sign_in(&self, user: SessionUser) {
        let mut state = self.state();
        state.data.user = Some(user);
        state.rotate = true;
        state.dirty = true;
    }

    /// Forget everything about this session.
    pub fn sign_out(&self) {
        let mut state = self.state();
        state.data = SessionData::default();
        state.destroyed = true;
        state.dirty = true;
    }

    /// Replace the pending flash. Only one flash is kept per session.
    pub fn set_flash(&self, flash: Flash) {
        let mut state = self.state();
        state.data.flash = Some(flash);
        state.dirty = true;
    }

    /// Remove and return the pending flash.
    pub fn take_flash(&self) -> Option<Flash> {
        let mut state = self.state();
        let flash = state.data.flash.take();
        state.dirty |= flash.is_some();
        flash
    }

    /// Final state for the session middleware.
    pub fn outcome(&self) -> ContextOutcome {
        let mut state = self.state();
        ContextOutcome {
            data: std::mem::take(&mut state.data),
            destroyed: state.destroyed,
            rotate: state.rotate,
            dirty: state.dirty,
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for RequestContext {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .ok_or_else(|| AppError::InternalError("session middleware is not installed".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flash::FlashScope;

    fn admin() -> SessionUser {
        SessionUser {
            id: 1,
            username: "admin".into(),
        }
    }

    #[test]
    fn flash_is_consumed_once() {
        let ctx = RequestContext::default();
        ctx.set_flash(Flash::success(FlashScope::Services, "Saved."));

        assert!(ctx.take_flash().is_some());
        assert!(ctx.take_flash().is_none());
    }

    #[test]
    fn sign_in_marks_rotation() {
        let ctx = RequestContext::default();
        assert!(!ctx.is_authenticated());

        ctx.sign_in(admin());
        assert_eq!(ctx.identity(), Some(admin()));

        let outcome = ctx.outcome();
        assert!(outcome.rotate);
        assert!(outcome.dirty);
        assert!(!outcome.destroyed);
        assert_eq!(outcome.data.user, Some(admin()));
    }

    #[test]
    fn sign_out_clears_everything() {
        let ctx = RequestContext::new(SessionData {
            user: Some(admin()),
            flash: Some(Flash::error(FlashScope::Users, "Oops.")),
        });
        ctx.sign_out();

        let outcome = ctx.outcome();
        assert!(outcome.destroyed);
        assert!(outcome.dirty);
        assert!(outcome.data.is_empty());
    }

    #[test]
    fn untouched_context_is_clean() {
        let ctx = RequestContext::new(SessionData {
            user: Some(admin()),
            flash: None,
        });
        assert!(ctx.identity().is_some());
        assert!(ctx.take_flash().is_none());

        assert!(!ctx.outcome().dirty);
    }

    #[test]
    fn flash_changes_mark_dirty() {
        let ctx = RequestContext::new(SessionData {
            user: Some(admin()),
            flash: Some(Flash::error(FlashScope::Users, "Oops.")),
        });
        assert!(ctx.take_flash().is_some());
        assert!(ctx.outcome().dirty);

        let ctx = RequestContext::default();
        ctx.set_flash(Flash::success(FlashScope::Users, "Created."));
        assert!(ctx.outcome().dirty);
    }

    #[test]
    fn clones_share_state() {
        let ctx = RequestContext::default();
        let handler_copy = ctx.clone();
        handler_copy.set_flash(Flash::success(FlashScope::Users, "Created."));

        assert!(ctx.outcome().data.flash.is_some());
    }
}
