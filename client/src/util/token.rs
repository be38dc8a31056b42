//! Bearer-token claim decoding.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tokens are issued and signed by the MiniBill backend. The browser never
//! verifies the signature; it only reads the payload segment to learn the
//! permission tier and expiry so the session and route guard can act on them.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Payload decoder: url-safe alphabet (standard `+`/`/` are mapped onto it
/// first), padding optional, non-canonical trailing bits accepted.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Why a token payload could not be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// The token has no payload segment.
    #[error("token is missing its payload segment")]
    Malformed,

    /// The payload segment is not base64url.
    #[error("token payload is not valid base64url: {0}")]
    Base64(String),

    /// The decoded payload is not a JSON object.
    #[error("token payload is not a JSON object: {0}")]
    Json(String),
}

/// Claims read from a token payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    /// `permissionLevel` claim, when present and a non-negative integer.
    pub permission_level: Option<u32>,
    /// `exp` claim converted to an instant at millisecond precision, when
    /// present and numeric. Values past the representable range saturate.
    pub expires_at: Option<DateTime<Utc>>,
}

impl Claims {
    /// A credential without a readable `exp` never counts as live.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map_or(true, |exp| exp <= now)
    }
}

/// Decode the claims carried in the payload segment of `token`.
///
/// # Errors
///
/// Returns [`TokenError`] when the token has no payload segment, the payload
/// is not base64url, or it does not decode to a JSON object.
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let payload = token.split('.').nth(1).ok_or(TokenError::Malformed)?;
    let payload = payload.replace('+', "-").replace('/', "_");
    let bytes = PAYLOAD_ENGINE
        .decode(payload)
        .map_err(|e| TokenError::Base64(e.to_string()))?;
    let value: Value = serde_json::from_slice(&bytes).map_err(|e| TokenError::Json(e.to_string()))?;
    let Value::Object(map) = value else {
        return Err(TokenError::Json("payload is not an object".to_owned()));
    };

    let permission_level = map
        .get("permissionLevel")
        .and_then(integral)
        .and_then(|level| u32::try_from(level).ok());
    let expires_at = map.get("exp").and_then(expiry);

    Ok(Claims { permission_level, expires_at })
}

/// Read an integer from a JSON number; floats are truncated toward zero.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn integral(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(int) = number.as_i64() {
        return Some(int);
    }
    number
        .as_f64()
        .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
        .map(|f| f.trunc() as i64)
}

/// Convert a numeric `exp` (seconds, possibly fractional) to an instant.
/// Out-of-range values clamp to the far end on their side of the epoch.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn expiry(value: &Value) -> Option<DateTime<Utc>> {
    let Value::Number(number) = value else {
        return None;
    };
    let secs = number.as_f64()?;
    let instant = match number.as_i64() {
        Some(whole) => whole.checked_mul(1000).and_then(DateTime::from_timestamp_millis),
        None => {
            let millis = (secs * 1000.0).floor();
            (millis > i64::MIN as f64 && millis < i64::MAX as f64)
                .then(|| millis as i64)
                .and_then(DateTime::from_timestamp_millis)
        }
    };
    Some(instant.unwrap_or(if secs > 0.0 { DateTime::<Utc>::MAX_UTC } else { DateTime::<Utc>::MIN_UTC }))
}
