//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its data fetching and form state. Validation and other
//! decisions live in plain functions next to the component so they can be
//! tested without a browser.

pub mod all_transactions;
pub mod catalog;
pub mod login;
pub mod my_transactions;
pub mod permission_management;
pub mod signup;
pub mod transaction_management;
pub mod user_management;
