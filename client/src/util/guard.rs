//! Route access policy and the per-navigation guard decision.
//!
//! DESIGN
//! ======
//! The guard is a pure function of the session and the route's policy. It
//! keeps no memory of earlier decisions, so a login or logout only affects
//! the next navigation.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::{SUPER_ADMIN_LEVEL, Session};

pub const LOGIN_PATH: &str = "/login";
pub const LANDING_PATH: &str = "/";

/// Who may enter a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// No session needed.
    Public,
    /// Any authenticated session, optionally with a minimum permission level.
    Authenticated { required_level: Option<u32> },
}

/// Outcome of guarding one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    RedirectToLanding,
}

impl GuardDecision {
    /// Path to navigate to instead of rendering, if any.
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin => Some(LOGIN_PATH),
            Self::RedirectToLanding => Some(LANDING_PATH),
        }
    }
}

/// One row of the static route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoutePolicy {
    pub path: &'static str,
    pub access: Access,
}

const fn public(path: &'static str) -> RoutePolicy {
    RoutePolicy { path, access: Access::Public }
}

const fn member(path: &'static str) -> RoutePolicy {
    RoutePolicy { path, access: Access::Authenticated { required_level: None } }
}

const fn admin(path: &'static str) -> RoutePolicy {
    RoutePolicy { path, access: Access::Authenticated { required_level: Some(SUPER_ADMIN_LEVEL) } }
}

/// Every navigable path in the app.
pub const ROUTE_TABLE: &[RoutePolicy] = &[
    public("/login"),
    public("/signup"),
    member("/"),
    member("/catalog"),
    member("/my-transactions"),
    admin("/admin/transactions"),
    admin("/admin/transaction-management"),
    admin("/admin/users"),
    admin("/admin/permissions"),
];

/// Decide a navigation given the session facts and the route's minimum level.
///
/// The threshold is inclusive: a level equal to `required_level` is allowed.
pub fn decide(is_authenticated: bool, permission_level: u32, required_level: Option<u32>) -> GuardDecision {
    if !is_authenticated {
        return GuardDecision::RedirectToLogin;
    }
    match required_level {
        Some(required) if permission_level < required => GuardDecision::RedirectToLanding,
        _ => GuardDecision::Allow,
    }
}

/// Look up the policy for `path`, ignoring a trailing slash.
pub fn policy_for(path: &str) -> Option<&'static RoutePolicy> {
    let trimmed = path.trim_end_matches('/');
    let normalized = if trimmed.is_empty() { LANDING_PATH } else { trimmed };
    ROUTE_TABLE.iter().find(|policy| policy.path == normalized)
}

/// Where an unmatched path sends the user.
pub fn fallback_decision(is_authenticated: bool) -> GuardDecision {
    if is_authenticated {
        GuardDecision::RedirectToLanding
    } else {
        GuardDecision::RedirectToLogin
    }
}

/// Guard a navigation to `path` for `session`.
pub fn evaluate(session: &Session, path: &str) -> GuardDecision {
    match policy_for(path).map(|policy| policy.access) {
        Some(Access::Public) => GuardDecision::Allow,
        Some(Access::Authenticated { required_level }) => {
            decide(session.is_authenticated(), session.permission_level(), required_level)
        }
        None => fallback_decision(session.is_authenticated()),
    }
}
