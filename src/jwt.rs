//! JWT inspection: base64url-decode the header and payload segments and
//! report the registered time claims. No signature verification is performed;
//! the signature segment is kept opaque.

use anyhow::{Context, Result, bail};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct DecodedToken {
    pub header: Value,
    pub payload: Value,
    /// Raw (still encoded) signature segment.
    pub signature: String,
    pub claims: TimeClaims,
}

/// Registered time claims, interpreted as unix seconds.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TimeClaims {
    pub issued_at: Option<DateTime<Utc>>,
    pub not_before: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    /// `Some(true)` once `exp` has passed, `None` when the token has no `exp`.
    pub expired: Option<bool>,
    /// `Some(true)` while `nbf` is still in the future.
    pub not_yet_valid: Option<bool>,
}

fn claim_timestamp(payload: &Value, name: &str) -> Option<DateTime<Utc>> {
    payload
        .get(name)
        .and_then(Value::as_i64)
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}

/// Decode a JWT, evaluating time claims against `now`.
///
/// Malformed tokens (wrong segment count, invalid base64, invalid JSON) are
/// reported as errors naming the offending segment.
pub fn decode(token: &str, now: DateTime<Utc>) -> Result<DecodedToken> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    if segments.len() != 3 {
        bail!(
            "Invalid JWT: expected 3 segments separated by '.', found {}",
            segments.len()
        );
    }

    let decode_json = |segment: &str, what: &str| -> Result<Value> {
        let bytes = URL_SAFE_NO_PAD
            .decode(segment)
            .with_context(|| format!("Invalid base64url in JWT {}", what))?;
        serde_json::from_slice(&bytes).with_context(|| format!("Invalid JSON in JWT {}", what))
    };

    let header = decode_json(segments[0], "header")?;
    let payload = decode_json(segments[1], "payload")?;

    let issued_at = claim_timestamp(&payload, "iat");
    let not_before = claim_timestamp(&payload, "nbf");
    let expires_at = claim_timestamp(&payload, "exp");
    let claims = TimeClaims {
        issued_at,
        not_before,
        expires_at,
        expired: expires_at.map(|exp| now >= exp),
        not_yet_valid: not_before.map(|nbf| now < nbf),
    };

    Ok(DecodedToken {
        header,
        payload,
        signature: segments[2].to_string(),
        claims,
    })
}

/// Convenience wrapper evaluating time claims against the current clock.
pub fn decode_now(token: &str) -> Result<DecodedToken> {
    decode(token, Utc::now())
}
