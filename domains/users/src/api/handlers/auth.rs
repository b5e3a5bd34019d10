//! Auth introspection API handler
//!
//! Implements:
//! - GET /api/auth/me - Return the verified identity of the current caller

use agriloop_auth::{AuthUser, Identity};
use axum::Json;

/// GET /api/auth/me
pub async fn me(AuthUser(identity): AuthUser) -> Json<Identity> {
    Json(identity)
}
