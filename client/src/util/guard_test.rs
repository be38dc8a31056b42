use super::*;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use crate::util::storage::MemoryStore;

fn token(level: u32) -> String {
    let exp = Utc::now().timestamp() + 3600;
    let payload = serde_json::json!({ "permissionLevel": level, "exp": exp });
    format!("h.{}.s", URL_SAFE_NO_PAD.encode(serde_json::to_vec(&payload).unwrap()))
}

fn signed_in(level: u32) -> Session {
    let mut session = Session::default();
    session.login(&MemoryStore::new(), &token(level));
    session
}

// =============================================================
// decide
// =============================================================

#[test]
fn unauthenticated_always_redirects_to_login() {
    for required in [None, Some(0), Some(1), Some(99), Some(u32::MAX)] {
        for level in [0, 50, 99] {
            assert_eq!(decide(false, level, required), GuardDecision::RedirectToLogin);
        }
    }
}

#[test]
fn equal_level_is_allowed() {
    assert_eq!(decide(true, 99, Some(99)), GuardDecision::Allow);
    assert_eq!(decide(true, 0, Some(0)), GuardDecision::Allow);
}

#[test]
fn insufficient_level_redirects_to_landing() {
    assert_eq!(decide(true, 50, Some(99)), GuardDecision::RedirectToLanding);
    assert_eq!(decide(true, 0, Some(1)), GuardDecision::RedirectToLanding);
}

#[test]
fn no_required_level_allows_any_session() {
    assert_eq!(decide(true, 0, None), GuardDecision::Allow);
    assert_eq!(decide(true, 99, None), GuardDecision::Allow);
}

#[test]
fn redirect_targets() {
    assert_eq!(GuardDecision::Allow.redirect_target(), None);
    assert_eq!(GuardDecision::RedirectToLogin.redirect_target(), Some("/login"));
    assert_eq!(GuardDecision::RedirectToLanding.redirect_target(), Some("/"));
}

// =============================================================
// Route table
// =============================================================

#[test]
fn policy_lookup_ignores_trailing_slash() {
    assert_eq!(policy_for("/catalog/").map(|p| p.path), Some("/catalog"));
    assert_eq!(policy_for("/").map(|p| p.path), Some("/"));
    assert_eq!(policy_for("").map(|p| p.path), Some("/"));
    assert!(policy_for("/admin").is_none());
}

#[test]
fn admin_routes_require_top_tier() {
    for path in ["/admin/transactions", "/admin/transaction-management", "/admin/users", "/admin/permissions"] {
        assert_eq!(
            policy_for(path).map(|p| p.access),
            Some(Access::Authenticated { required_level: Some(99) }),
            "{path}"
        );
    }
}

#[test]
fn route_table_paths_are_unique() {
    for (i, a) in ROUTE_TABLE.iter().enumerate() {
        for b in &ROUTE_TABLE[i + 1..] {
            assert_ne!(a.path, b.path);
        }
    }
}

// =============================================================
// evaluate
// =============================================================

#[test]
fn public_routes_allow_anyone() {
    let absent = Session::default();
    assert_eq!(evaluate(&absent, "/login"), GuardDecision::Allow);
    assert_eq!(evaluate(&absent, "/signup"), GuardDecision::Allow);
    assert_eq!(evaluate(&signed_in(99), "/login"), GuardDecision::Allow);
}

#[test]
fn unknown_path_falls_back_by_session() {
    assert_eq!(evaluate(&Session::default(), "/nope"), GuardDecision::RedirectToLogin);
    assert_eq!(evaluate(&signed_in(0), "/nope"), GuardDecision::RedirectToLanding);
}

#[test]
fn regular_user_is_bounced_from_admin_pages() {
    let session = signed_in(50);
    assert_eq!(evaluate(&session, "/my-transactions"), GuardDecision::Allow);
    assert_eq!(evaluate(&session, "/admin/users"), GuardDecision::RedirectToLanding);
}

#[test]
fn login_then_logout_scenario() {
    let store = MemoryStore::new();
    let mut session = Session::initialize(&store, Utc.timestamp_opt(0, 0).unwrap());
    assert_eq!(evaluate(&session, "/admin/users"), GuardDecision::RedirectToLogin);

    session.login(&store, &token(99));
    assert!(session.is_authenticated());
    assert_eq!(evaluate(&session, "/admin/users"), GuardDecision::Allow);
    assert_eq!(evaluate(&session, "/catalog"), GuardDecision::Allow);

    session.logout(&store);
    assert_eq!(evaluate(&session, "/admin/users"), GuardDecision::RedirectToLogin);
    assert_eq!(evaluate(&session, "/catalog"), GuardDecision::RedirectToLogin);
}

proptest! {
    #[test]
    fn signed_out_never_passes_a_protected_route(level in any::<u32>(), required in proptest::option::of(any::<u32>())) {
        prop_assert_eq!(decide(false, level, required), GuardDecision::RedirectToLogin);
    }

    #[test]
    fn threshold_is_inclusive(level in any::<u32>(), required in any::<u32>()) {
        let expected = if level >= required { GuardDecision::Allow } else { GuardDecision::RedirectToLanding };
        prop_assert_eq!(decide(true, level, Some(required)), expected);
    }

    #[test]
    fn arbitrary_paths_never_admit_a_signed_out_visitor_to_protected_pages(path in ".*") {
        let decision = evaluate(&Session::default(), &path);
        match policy_for(&path).map(|policy| policy.access) {
            Some(Access::Public) => prop_assert_eq!(decision, GuardDecision::Allow),
            _ => prop_assert_eq!(decision, GuardDecision::RedirectToLogin),
        }
    }
}
