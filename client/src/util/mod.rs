//! Session plumbing and small helpers used by pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Token decoding, the route table and storage sit here as plain functions so
//! they can be tested natively. Browser-only pieces (`localStorage`, timers,
//! `spawn_local`) are confined to `storage` and `task`.

pub mod auth;
pub mod format;
pub mod guard;
pub mod storage;
pub mod task;
pub mod token;
