//! Reads the `exp` claim out of a bearer token without verifying it.
//!
//! The token is expected to be three dot-separated segments with a base64 JSON
//! payload in the middle one. The result only drives client-side redirects; the
//! API remains the authority on whether a token is accepted.

use base64::{
    engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD},
    Engine as _,
};
use chrono::{DateTime, Utc};
use serde_json::Value;

pub fn decode_expiry(token: &str) -> Option<DateTime<Utc>> {
    let mut parts = token.split('.');
    let _header = parts.next()?;
    let payload = parts.next()?;
    parts.next()?;

    let payload = payload.trim_end_matches('=');
    let decoded = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| STANDARD_NO_PAD.decode(payload))
        .ok()?;
    let claims: Value = serde_json::from_slice(&decoded).ok()?;
    let exp = claims.get("exp")?;
    let seconds = match exp.as_i64() {
        Some(whole) => whole,
        None => numeric_date_seconds(exp.as_f64()?)?,
    };
    DateTime::from_timestamp(seconds, 0)
}

/// NumericDate may carry a fraction; it is truncated to whole seconds.
fn numeric_date_seconds(value: f64) -> Option<i64> {
    if !value.is_finite() || value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return None;
    }
    Some(value.trunc() as i64)
}

/// Undecodable tokens count as expired.
pub fn is_expired(token: &str, now: DateTime<Utc>) -> bool {
    match decode_expiry(token) {
        Some(expires_at) => now >= expires_at,
        None => true,
    }
}
