//! jwt-codec: a minimal, stateless JWT codec and verifier.
//!
//! Encodes a header/payload pair into a signed compact token string and
//! later decodes and authenticates that string against a shared secret.
//! Signing is HMAC-SHA256 over the already-encoded header and payload
//! segments; no external JWT library is involved.
//!
//! Every operation is a pure function of its inputs (plus the wall clock
//! where expiration is involved), so the whole API is safe to call
//! concurrently without coordination.
//!
//! # Compatibility warning
//!
//! The HMAC key is the *standard Base64 encoding* of the secret string,
//! not the raw secret bytes. This deviates from RFC 7515 conventions:
//! tokens minted here will not verify in a generic JWT library given the
//! same secret, and vice versa. The scheme is preserved as-is for
//! compatibility with tokens already issued by this system.
//!
//! # Example
//!
//! ```
//! use jwt_codec::ClaimsMap;
//!
//! let mut header = ClaimsMap::new();
//! header.insert("alg".to_string(), "HS256".into());
//! header.insert("typ".to_string(), "JWT".into());
//!
//! let mut payload = ClaimsMap::new();
//! payload.insert("sub".to_string(), "42".into());
//!
//! let token = jwt_codec::encode(&header, &payload, "secret123").unwrap();
//! assert!(jwt_codec::is_valid(&token, "secret123"));
//! assert!(jwt_codec::is_invalid(&token, "wrong-secret"));
//! ```

#![forbid(unsafe_code)]

mod decoder;
mod encoder;
pub mod error;
mod validator;

pub use decoder::{decode_header, decode_payload};
pub use encoder::{encode, encode_with_validity, ONE_DAY_SECS};
pub use error::JwtCodecError;
pub use validator::{is_authentic, is_expired, is_invalid, is_valid, is_well_formed};

/// An ordered mapping of claim names to JSON values.
///
/// Backed by `serde_json::Map` with the `preserve_order` feature, so
/// serialization follows insertion order. Order preservation matters:
/// [`is_authentic`] re-encodes decoded claims and compares the result to
/// the original token byte-for-byte, which only works if a decode/encode
/// round trip reproduces the exact key sequence.
pub type ClaimsMap = serde_json::Map<String, serde_json::Value>;
