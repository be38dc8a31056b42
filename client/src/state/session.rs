//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<SessionState>` is created by the root component and handed
//! to every page through context. The route guard and the navigation bar
//! read it; `initialize`, `login` and `logout` are the only ways it changes.
//!
//! ERROR HANDLING
//! ==============
//! Malformed or expired credentials never reach callers as errors. They are
//! logged, dropped from storage, and leave the session absent.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use chrono::{DateTime, Utc};

use crate::util::storage::CredentialStore;
use crate::util::token::decode_claims;

/// Highest permission tier; unlocks every admin page and control.
pub const SUPER_ADMIN_LEVEL: u32 = 99;

/// Lowest tier labelled as an administrator.
pub const ADMIN_LEVEL: u32 = 50;

/// The authenticated identity derived from the current credential.
///
/// Fields are private so the permission level can only come from a token
/// decode performed by [`Session::initialize`] or [`Session::login`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    permission_level: u32,
}

impl Session {
    /// Restore the session persisted by a previous visit.
    ///
    /// Undecodable or expired credentials are removed from `store` and
    /// yield an absent session.
    pub fn initialize(store: &impl CredentialStore, now: DateTime<Utc>) -> Self {
        let Some(token) = store.load() else {
            return Self::default();
        };

        match decode_claims(&token) {
            Ok(claims) if claims.is_expired(now) => {
                log::info!("stored credential expired; starting signed out");
                store.clear();
                Self::default()
            }
            Ok(claims) => Self {
                token: Some(token),
                permission_level: claims.permission_level.unwrap_or(0),
            },
            Err(e) => {
                log::warn!("discarding stored credential: {e}");
                store.clear();
                Self::default()
            }
        }
    }

    /// Install a freshly issued credential and persist it.
    ///
    /// Expiry is not checked here; the token was just handed out by the
    /// backend. An undecodable token still signs the user in, at level 0.
    pub fn login(&mut self, store: &impl CredentialStore, token: &str) {
        store.save(token);
        self.permission_level = match decode_claims(token) {
            Ok(claims) => claims.permission_level.unwrap_or(0),
            Err(e) => {
                log::warn!("credential claims unreadable on login: {e}");
                0
            }
        };
        self.token = Some(token.to_owned());
    }

    /// Forget the credential. Calling this while signed out changes nothing.
    pub fn logout(&mut self, store: &impl CredentialStore) {
        store.clear();
        *self = Self::default();
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Permission tier of the current credential; 0 when signed out.
    pub fn permission_level(&self) -> u32 {
        self.permission_level
    }

    /// Raw bearer token for `Authorization` headers.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_super_admin(&self) -> bool {
        self.permission_level >= SUPER_ADMIN_LEVEL
    }
}

/// Session plus whether it has been restored from storage yet.
///
/// `ready` stays false during server rendering and until the first client
/// effect runs, so guarded routes render the same placeholder on both sides
/// of hydration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Session,
    pub ready: bool,
}

impl SessionState {
    /// Run [`Session::initialize`] once; later calls are ignored.
    pub fn restore(&mut self, store: &impl CredentialStore, now: DateTime<Utc>) {
        if self.ready {
            return;
        }
        self.session = Session::initialize(store, now);
        self.ready = true;
    }
}

/// Display label for a permission tier.
pub fn tier_label(level: Option<u32>) -> String {
    match level {
        None => "No permission".to_owned(),
        Some(l) if l >= SUPER_ADMIN_LEVEL => "Super administrator".to_owned(),
        Some(l) if l >= ADMIN_LEVEL => "Administrator".to_owned(),
        Some(l) => format!("User ({l})"),
    }
}

/// CSS modifier for a permission tier chip.
pub fn tier_class(level: Option<u32>) -> &'static str {
    match level {
        None => "chip",
        Some(l) if l >= SUPER_ADMIN_LEVEL => "chip chip--error",
        Some(l) if l >= ADMIN_LEVEL => "chip chip--warning",
        Some(_) => "chip chip--info",
    }
}
