//! Client session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component provides one `RwSignal<SessionState>`; the route guard,
//! layout and pages all read it from context.

pub mod session;
