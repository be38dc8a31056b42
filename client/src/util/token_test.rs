use super::*;
use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use chrono::TimeZone;

// =============================================================
// Helpers
// =============================================================

fn token_with(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(serde_json::to_vec(payload).unwrap());
    format!("{header}.{body}.signature")
}

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

// =============================================================
// decode_claims
// =============================================================

#[test]
fn decode_reads_permission_level_and_expiry() {
    let token = token_with(&serde_json::json!({ "sub": "admin", "permissionLevel": 99, "exp": 1_900_000_000 }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.permission_level, Some(99));
    assert_eq!(claims.expires_at, Some(at(1_900_000_000)));
}

#[test]
fn decode_missing_permission_claim_is_none() {
    let token = token_with(&serde_json::json!({ "sub": "alice", "exp": 1_900_000_000 }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.permission_level, None);
}

#[test]
fn decode_negative_or_non_numeric_permission_is_none() {
    let negative = token_with(&serde_json::json!({ "permissionLevel": -5, "exp": 1 }));
    assert_eq!(decode_claims(&negative).unwrap().permission_level, None);

    let text = token_with(&serde_json::json!({ "permissionLevel": "99", "exp": 1 }));
    assert_eq!(decode_claims(&text).unwrap().permission_level, None);
}

#[test]
fn decode_accepts_float_claims() {
    let token = token_with(&serde_json::json!({ "permissionLevel": 50.0, "exp": 1_900_000_000.75 }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.permission_level, Some(50));
    assert_eq!(claims.expires_at, DateTime::from_timestamp_millis(1_900_000_000_750));
}

#[test]
fn fractional_expiry_keeps_sub_second_precision() {
    let token = token_with(&serde_json::json!({ "exp": 1_750_000_000.9 }));
    let claims = decode_claims(&token).unwrap();
    assert!(!claims.is_expired(at(1_750_000_000)));
    assert!(claims.is_expired(at(1_750_000_001)));
}

#[test]
fn far_future_expiry_saturates_instead_of_expiring() {
    for exp in [serde_json::json!(1e20), serde_json::json!(9_000_000_000_000_i64), serde_json::json!(u64::MAX)] {
        let claims = decode_claims(&token_with(&serde_json::json!({ "exp": exp }))).unwrap();
        assert_eq!(claims.expires_at, Some(DateTime::<Utc>::MAX_UTC), "exp {exp}");
        assert!(!claims.is_expired(at(1_900_000_000)));
    }
}

#[test]
fn far_past_expiry_saturates_to_expired() {
    for exp in [serde_json::json!(-1e20), serde_json::json!(-9_000_000_000_000_i64)] {
        let claims = decode_claims(&token_with(&serde_json::json!({ "exp": exp }))).unwrap();
        assert_eq!(claims.expires_at, Some(DateTime::<Utc>::MIN_UTC), "exp {exp}");
        assert!(claims.is_expired(at(0)));
    }
}

#[test]
fn non_numeric_expiry_is_none() {
    for exp in [serde_json::json!("1900000000"), serde_json::json!(null), serde_json::json!(true)] {
        let claims = decode_claims(&token_with(&serde_json::json!({ "exp": exp }))).unwrap();
        assert_eq!(claims.expires_at, None);
    }
}

#[test]
fn decode_tolerates_padded_payload() {
    let body = base64::engine::general_purpose::URL_SAFE.encode(br#"{"permissionLevel":1,"exp":100}"#);
    let claims = decode_claims(&format!("h.{body}.s")).unwrap();
    assert_eq!(claims.permission_level, Some(1));
}

#[test]
fn decode_accepts_standard_alphabet_payload() {
    // `>>>` encodes to `Pj4+` in the standard alphabet.
    let payload = br#"{"permissionLevel":99,"note":">>>"}"#;
    let body = STANDARD_NO_PAD.encode(payload);
    assert!(body.contains('+') || body.contains('/'), "{body}");
    let claims = decode_claims(&format!("h.{body}.s")).unwrap();
    assert_eq!(claims.permission_level, Some(99));
}

#[test]
fn decode_tolerates_non_canonical_trailing_bits() {
    // `e30` is `{}`; `e31` sets unused trailing bits.
    assert_eq!(decode_claims("h.e31.s"), Ok(Claims { permission_level: None, expires_at: None }));
}

#[test]
fn decode_without_payload_segment_is_malformed() {
    assert_eq!(decode_claims("not-a-token"), Err(TokenError::Malformed));
    assert_eq!(decode_claims(""), Err(TokenError::Malformed));
}

#[test]
fn decode_rejects_invalid_base64() {
    assert!(matches!(decode_claims("a.!!!.c"), Err(TokenError::Base64(_))));
}

#[test]
fn decode_rejects_non_json_payload() {
    let body = URL_SAFE_NO_PAD.encode(b"hello");
    assert!(matches!(decode_claims(&format!("a.{body}.c")), Err(TokenError::Json(_))));
}

#[test]
fn decode_rejects_non_object_payload() {
    let body = URL_SAFE_NO_PAD.encode(b"[99, 1900000000]");
    assert!(matches!(decode_claims(&format!("a.{body}.c")), Err(TokenError::Json(_))));
}

// =============================================================
// Claims::is_expired
// =============================================================

#[test]
fn expiry_is_inclusive_of_now() {
    let claims = Claims { permission_level: None, expires_at: Some(at(100)) };
    assert!(claims.is_expired(at(100)));
    assert!(claims.is_expired(at(101)));
    assert!(!claims.is_expired(at(99)));
}

#[test]
fn missing_expiry_counts_as_expired() {
    let claims = Claims { permission_level: Some(99), expires_at: None };
    assert!(claims.is_expired(at(0)));
}
