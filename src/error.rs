//! Domain error types for jwt-codec.
//!
//! The error surface is deliberately small: only serialization of
//! non-JSON-representable input is an error. Malformed or absent token
//! segments decode to `None`, and expired or forged tokens are `false`
//! results from the validity predicates, never errors, so that the
//! predicates stay total functions.

use thiserror::Error;

/// Errors that can occur during token encoding.
#[derive(Debug, Error)]
pub enum JwtCodecError {
    /// The header or payload could not be serialized as JSON.
    #[error("failed to serialize {segment} as JSON: {source}")]
    Serialization {
        /// Which segment failed to serialize (e.g., "header", "payload").
        segment: String,
        /// The underlying serialization failure.
        #[source]
        source: serde_json::Error,
    },
}
