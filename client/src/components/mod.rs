//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session from Leptos context. Pages compose them; none
//! of them call the REST API.

pub mod confirm_dialog;
pub mod guarded;
pub mod main_layout;
pub mod notice;
pub mod transaction_table;
