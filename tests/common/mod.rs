//! Shared test fixtures and helper utilities.
//!
//! Provides pre-built tokens with known claims for use in integration
//! tests. The token constants were generated independently of this
//! implementation so they double as interoperability vectors for the
//! signing scheme.
#![allow(dead_code)]

use jwt_codec::ClaimsMap;

/// Secret used to sign all fixture tokens.
pub const TEST_SECRET: &str = "secret123";

/// A valid, non-expiring token.
///
/// Header: `{"alg":"HS256","typ":"JWT"}`
/// Payload: `{"sub":"42"}`
/// Secret: `"secret123"`
pub const VALID_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
     eyJzdWIiOiI0MiJ9.\
     WvRKELFcH_AEuR-0rb1GOoKmk5H-byIvZWjpGoV06wc";

/// An authentic token whose `exp` (2023-11-15) is long past.
///
/// Header: `{"alg":"HS256"}`
/// Payload: `{"sub":"42","iat":1700000000,"exp":1700086400}`
/// Secret: `"secret123"`
pub const EXPIRED_TOKEN: &str = "eyJhbGciOiJIUzI1NiJ9.\
     eyJzdWIiOiI0MiIsImlhdCI6MTcwMDAwMDAwMCwiZXhwIjoxNzAwMDg2NDAwfQ.\
     tYL1x3te3PfmLEBruv76mYuBsfSd-XYzc9uMaRNAgHI";

/// A malformed token with only two parts (missing signature).
pub const MALFORMED_TOKEN_TWO_PARTS: &str = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiI0MiJ9";

/// A completely invalid token string.
pub const INVALID_TOKEN: &str = "not-a-valid-jwt";

/// An empty string for edge case testing.
pub const EMPTY_TOKEN: &str = "";

/// Standard test header: `{"alg":"HS256","typ":"JWT"}`.
pub fn standard_header() -> ClaimsMap {
    claims(serde_json::json!({"alg": "HS256", "typ": "JWT"}))
}

/// Standard test claims: `{"sub":"42"}`.
pub fn standard_claims() -> ClaimsMap {
    claims(serde_json::json!({"sub": "42"}))
}

/// Build a `ClaimsMap` from a `json!` object literal.
pub fn claims(value: serde_json::Value) -> ClaimsMap {
    value.as_object().cloned().expect("fixture must be a JSON object")
}
