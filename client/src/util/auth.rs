//! Reactive wrappers around the session lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and layout call these instead of touching storage directly, so the
//! browser `localStorage` slot and the session signal never drift apart.

use chrono::Utc;
use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::storage::BrowserStore;

/// The session signal provided by the root component.
pub fn use_session() -> RwSignal<SessionState> {
    expect_context::<RwSignal<SessionState>>()
}

/// Restore the persisted session once the app is running in the browser.
pub fn install_session_restore(session: RwSignal<SessionState>) {
    Effect::new(move || {
        session.update(|state| state.restore(&BrowserStore, Utc::now()));
    });
}

/// Sign in with a token just issued by the backend.
pub fn sign_in(session: RwSignal<SessionState>, token: &str) {
    session.update(|state| {
        state.session.login(&BrowserStore, token);
        state.ready = true;
    });
}

/// Sign out; safe to call when already signed out.
pub fn sign_out(session: RwSignal<SessionState>) {
    session.update(|state| state.session.logout(&BrowserStore));
}

/// Bearer token for API calls, read without subscribing.
pub fn current_token(session: RwSignal<SessionState>) -> Option<String> {
    session.with_untracked(|state| state.session.token().map(str::to_owned))
}
