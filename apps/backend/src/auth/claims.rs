//! Identity carried inside access tokens.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Claims the client submits at login. Embedded in the token unmodified.
pub type IdentityPayload = serde_json::Map<String, Value>;

/// Claim names the issuer owns; a payload may not supply them.
pub const RESERVED_CLAIMS: [&str; 2] = ["iat", "exp"];

/// Decoded token contents, inserted into request extensions by the
/// `TokenVerifier` middleware.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(flatten)]
    pub payload: IdentityPayload,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

impl Identity {
    /// The `email` claim, when present and a string.
    pub fn email(&self) -> Option<&str> {
        self.payload.get("email").and_then(Value::as_str)
    }
}
