//! JWT claims schema

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims carried by an AgriLoop access token.
///
/// `id` and `role` are mandatory; a token missing either, or carrying them
/// with the wrong JSON type, fails to decode and is rejected as invalid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// User id (`users.id`)
    pub id: i64,
    /// User role, e.g. `"admin"` or `"farmer"`
    pub role: String,
    /// Expires at
    pub exp: u64,
    /// Issued at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
    /// Any other claims the issuer put in the token
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
