//! Token validity predicates.
//!
//! Structural, temporal, and authenticity checks over the compact token
//! string. All predicates are total: malformed input is simply `false`
//! (or treated as empty claims), never an error.

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::decoder::{decode_header, decode_payload};
use crate::encoder::encode_with_validity;

/// Loose structural pattern: three non-empty groups of base64url
/// characters separated by single dots. `=` is accepted even though the
/// encoder strips padding; this is a format check, not a guarantee that
/// the segments decode.
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9\-_=]+\.[A-Za-z0-9\-_=]+\.[A-Za-z0-9\-_=]+$")
        .expect("token pattern is a valid regex")
});

/// Check that a token has the three-segment compact structure.
pub fn is_well_formed(token: &str) -> bool {
    TOKEN_PATTERN.is_match(token)
}

/// Check whether a token's `exp` claim lies in the past.
///
/// A token with no decodable payload, no `exp` claim, or a non-integer
/// `exp` is treated as non-expiring and reported as not expired. Such a
/// token still has to pass [`is_authentic`] to be considered valid.
pub fn is_expired(token: &str) -> bool {
    let Some(payload) = decode_payload(token) else {
        return false;
    };
    let Some(exp) = payload.get("exp").and_then(serde_json::Value::as_i64) else {
        return false;
    };
    exp < Utc::now().timestamp()
}

/// Check that a token was signed with `secret` and has not been altered.
///
/// Decodes the header and payload (treating undecodable segments as
/// empty maps), re-runs the encoder over them with no validity window so
/// existing `iat`/`exp` claims are signed as-is, and compares the
/// re-derived token to the original byte-for-byte. Any mutation of any
/// segment changes the re-derived string, so this covers both content
/// integrity and signature validity. The comparison is constant-time.
pub fn is_authentic(token: &str, secret: &str) -> bool {
    let header = decode_header(token).unwrap_or_default();
    let payload = decode_payload(token).unwrap_or_default();

    let rederived = match encode_with_validity(&header, &payload, secret, 0) {
        Ok(t) => t,
        Err(_) => return false,
    };

    rederived.as_bytes().ct_eq(token.as_bytes()).into()
}

/// Check structure, expiry, and authenticity in one call.
///
/// Evaluates [`is_well_formed`], then [`is_expired`], then
/// [`is_authentic`], short-circuiting so the cheap structural check runs
/// first and the HMAC derivation last.
pub fn is_valid(token: &str, secret: &str) -> bool {
    if !is_well_formed(token) {
        debug!("token rejected: malformed structure");
        return false;
    }
    if is_expired(token) {
        debug!("token rejected: expired");
        return false;
    }
    if !is_authentic(token, secret) {
        debug!("token rejected: signature mismatch");
        return false;
    }
    true
}

/// Negation of [`is_valid`], for call sites that read better positive.
pub fn is_invalid(token: &str, secret: &str) -> bool {
    !is_valid(token, secret)
}
