//! Networking modules for the MiniBill REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `types` defines the JSON schema, and `error`
//! is the failure type every call returns.

pub mod api;
pub mod error;
pub mod types;
