//! Persisted credential slot.
//!
//! The browser build keeps the raw token under the `token` key in
//! `localStorage`. Server rendering and tests use [`MemoryStore`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;

/// `localStorage` key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";

/// A single key-value slot for the current credential.
///
/// Implementations swallow storage failures: a slot that cannot be read
/// behaves as empty, and failed writes are logged and dropped.
pub trait CredentialStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// `window.localStorage` in the browser; a no-op everywhere else.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl CredentialStore for BrowserStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let stored = local_storage().is_some_and(|s| s.set_item(TOKEN_KEY, token).is_ok());
            if !stored {
                log::warn!("could not persist credential to localStorage");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

/// In-process credential slot.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`, as after a previous visit.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { slot: RefCell::new(Some(token.into())) }
    }

    /// Current slot contents, for assertions.
    pub fn peek(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl CredentialStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}
