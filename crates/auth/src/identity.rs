//! Verified caller identity attached to a request

use serde::Serialize;
use serde_json::{Map, Value};

use crate::claims::IdentityClaims;

/// The only role with blanket access
pub const ADMIN_ROLE: &str = "admin";

/// Identity decoded from a verified token.
///
/// Lives for one request: inserted into the request extensions by the
/// verification stage and read by predicates and handlers. Never mutated
/// after attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub id: i64,
    pub role: String,
    #[serde(skip)]
    pub extra: Map<String, Value>,
}

impl Identity {
    pub fn new(id: i64, role: impl Into<String>) -> Self {
        Self {
            id,
            role: role.into(),
            extra: Map::new(),
        }
    }

    /// Exact, case-sensitive match on `"admin"`
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }

    pub fn owns(&self, resource_id: i64) -> bool {
        self.id == resource_id
    }

    pub fn can_access(&self, resource_id: i64) -> bool {
        self.is_admin() || self.owns(resource_id)
    }
}

impl From<IdentityClaims> for Identity {
    fn from(claims: IdentityClaims) -> Self {
        Self {
            id: claims.id,
            role: claims.role,
            extra: claims.extra,
        }
    }
}
