//! Axum extractors for authentication and authorization
//!
//! Generic over any state `S` where `AuthGate: FromRef<S>`, axum's
//! nested-state pattern. Each extractor hands the handler the verified
//! [`Identity`]; the authorizing ones can only be built from an identity the
//! verification stage produced.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::error::AuthError;
use crate::gate::{authorize_admin, authorize_owner_or_admin, AuthGate};
use crate::identity::Identity;
use crate::middleware::resource_id_param;

/// Any authenticated caller.
///
/// Reuses the identity already attached by the `authenticate` middleware,
/// otherwise runs verification itself.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl<S> FromRequestParts<S> for AuthUser
where
    AuthGate: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>() {
            return Ok(AuthUser(identity.clone()));
        }

        let gate = AuthGate::from_ref(state);
        let identity = gate.authenticate(&parts.headers)?;
        parts.extensions.insert(identity.clone());

        Ok(AuthUser(identity))
    }
}

/// Admin-only caller. Non-admins are rejected with 403.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Identity);

impl<S> FromRequestParts<S> for AdminUser
where
    AuthGate: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser(identity) = AuthUser::from_request_parts(parts, state).await?;
        authorize_admin(Some(&identity))?;

        Ok(AdminUser(identity))
    }
}

/// Caller who is an admin or whose id equals the route's `{id}`.
///
/// Put it before `Path` in the handler signature so that unauthenticated or
/// unauthorized callers see 401/403 rather than a path rejection.
#[derive(Debug, Clone)]
pub struct OwnerOrAdmin(pub Identity);

impl<S> FromRequestParts<S> for OwnerOrAdmin
where
    AuthGate: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser(identity) = AuthUser::from_request_parts(parts, state).await?;
        let resource_id = resource_id_param(parts).await;
        authorize_owner_or_admin(Some(&identity), resource_id.as_deref())?;

        Ok(OwnerOrAdmin(identity))
    }
}
