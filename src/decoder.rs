//! Token decoding.
//!
//! Extracts the header and payload segments from a compact token string
//! and parses them back into claims maps. Decoding is total: an absent
//! segment, invalid base64, invalid JSON, or a non-object document all
//! yield `None` rather than an error, so the validity predicates built
//! on top never have to raise.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::Value;

use crate::ClaimsMap;

/// Decode the header segment of a token.
///
/// Returns `None` if the segment is absent or does not decode to a JSON
/// object.
pub fn decode_header(token: &str) -> Option<ClaimsMap> {
    decode_segment_at(token, 0)
}

/// Decode the payload segment of a token.
///
/// Returns `None` if the segment is absent or does not decode to a JSON
/// object.
pub fn decode_payload(token: &str) -> Option<ClaimsMap> {
    decode_segment_at(token, 1)
}

/// Split the token on dots and decode the segment at `index` as a JSON
/// object. Decoded maps preserve the document's key order, which the
/// authenticity check relies on when re-encoding.
fn decode_segment_at(token: &str, index: usize) -> Option<ClaimsMap> {
    let segment = token.split('.').nth(index)?;
    let bytes = URL_SAFE_NO_PAD.decode(segment).ok()?;
    match serde_json::from_slice::<Value>(&bytes).ok()? {
        Value::Object(map) => Some(map),
        _ => None,
    }
}
