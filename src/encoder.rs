//! Token encoding and signing.
//!
//! Serializes the header and payload maps to JSON, base64url-encodes
//! each segment, and signs the joined segments with HMAC-SHA256. The
//! signature covers the already-encoded segments joined by a literal
//! dot, never the raw JSON.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde_json::Value;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::error::JwtCodecError;
use crate::ClaimsMap;

type HmacSha256 = Hmac<Sha256>;

/// Default token validity window: one day, in seconds.
pub const ONE_DAY_SECS: i64 = 86_400;

/// Encode a header and payload into a signed token with the default
/// one-day validity window.
///
/// Equivalent to [`encode_with_validity`] with [`ONE_DAY_SECS`].
///
/// # Errors
///
/// Returns [`JwtCodecError::Serialization`] if the header or payload
/// contains values not representable as JSON.
pub fn encode(
    header: &ClaimsMap,
    payload: &ClaimsMap,
    secret: &str,
) -> Result<String, JwtCodecError> {
    encode_with_validity(header, payload, secret, ONE_DAY_SECS)
}

/// Encode a header and payload into a signed token.
///
/// When `validity_secs` is positive, the current wall-clock time is
/// captured once and two integer claims are injected into a copy of the
/// payload: `iat` (issued-at, epoch seconds) and `exp`
/// (`iat + validity_secs`). Claims already present under those names are
/// overwritten in place; new ones are appended. When `validity_secs` is
/// zero or negative nothing is injected and any caller-supplied
/// `iat`/`exp` pass through unchanged. The caller's payload map is never
/// mutated.
///
/// The result is three dot-joined segments: base64url (unpadded) of the
/// header JSON, of the payload JSON, and of the raw HMAC-SHA256 digest
/// of the first two segments.
///
/// # Errors
///
/// Returns [`JwtCodecError::Serialization`] if the header or payload
/// contains values not representable as JSON.
pub fn encode_with_validity(
    header: &ClaimsMap,
    payload: &ClaimsMap,
    secret: &str,
    validity_secs: i64,
) -> Result<String, JwtCodecError> {
    let mut payload = payload.clone();
    if validity_secs > 0 {
        let now = Utc::now().timestamp();
        payload.insert("iat".to_string(), Value::from(now));
        payload.insert("exp".to_string(), Value::from(now + validity_secs));
    }

    let header_seg = encode_segment(header, "header")?;
    let payload_seg = encode_segment(&payload, "payload")?;
    let signature_seg = sign(&header_seg, &payload_seg, secret);

    Ok(format!("{header_seg}.{payload_seg}.{signature_seg}"))
}

/// Serialize a claims map to JSON and base64url-encode it without padding.
fn encode_segment(claims: &ClaimsMap, segment: &str) -> Result<String, JwtCodecError> {
    let json = serde_json::to_string(claims).map_err(|source| JwtCodecError::Serialization {
        segment: segment.to_string(),
        source,
    })?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Compute the signature segment over the encoded header and payload.
///
/// The HMAC key is the standard padded base64 encoding of the secret
/// string, not the raw secret bytes. Tokens signed this way do not
/// verify in generic JWT libraries given the same secret; the scheme is
/// kept bit-exact for compatibility with tokens this system has already
/// issued. The derived key is zeroized after signing.
fn sign(header_seg: &str, payload_seg: &str, secret: &str) -> String {
    let key = Zeroizing::new(STANDARD.encode(secret.as_bytes()));
    let mut mac =
        HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC-SHA256 accepts any key length");
    mac.update(header_seg.as_bytes());
    mac.update(b".");
    mac.update(payload_seg.as_bytes());
    URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
}
