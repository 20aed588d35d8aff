//! Claim sets of already verified tokens.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims decoded from a token whose signature, issuer, audience, and
/// lifetime were checked upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    /// Wraps a decoded claim map.
    #[must_use]
    pub const fn new(claims: Map<String, Value>) -> Self {
        Self(claims)
    }

    /// Returns the `sub` claim identifying the authenticated user.
    ///
    /// Returns `None` when the claim is absent or not a string.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.string_claim("sub")
    }

    /// Returns a string-valued claim.
    #[must_use]
    pub fn string_claim(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }
}
