//! The AuthGate pipeline: extract → verify → attach → authorize
//!
//! Everything here is synchronous and side-effect free apart from debug
//! logging, so the middleware and extractor front-ends can share it and the
//! same request always gets the same decision.

use std::sync::Arc;

use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::identity::Identity;
use crate::verifier::{extract_bearer_token, JwtVerifier, TokenVerifier};

/// Route parameter naming the target resource for ownership checks
pub const RESOURCE_ID_PARAM: &str = "id";

/// Verification stage of the pipeline.
///
/// Cheap to clone; the verifier (and the secret inside it) is shared and
/// read-only. Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthGate {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthGate {
    verifier: Arc<dyn TokenVerifier>,
}

impl AuthGate {
    pub fn new(verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { verifier }
    }

    /// Gate backed by the HS256 [`JwtVerifier`]
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(Arc::new(JwtVerifier::new(config)))
    }

    /// Authenticate a request from its headers.
    ///
    /// A missing or empty credential is rejected before the verifier is
    /// consulted.
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<Identity, AuthError> {
        let result = headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingCredential)
            .and_then(extract_bearer_token)
            .and_then(|token| self.verifier.verify(token))
            .map(Identity::from);

        if let Err(e) = &result {
            tracing::debug!(error = %e, "Request rejected by AuthGate");
        }

        result
    }
}

/// Admin-only predicate. A missing identity is denied, never a panic.
pub fn authorize_admin(identity: Option<&Identity>) -> Result<&Identity, AuthError> {
    match identity {
        Some(identity) if identity.is_admin() => Ok(identity),
        Some(identity) => {
            tracing::debug!(user_id = identity.id, "Admin privileges required");
            Err(AuthError::InsufficientRole)
        }
        None => {
            tracing::debug!("Admin check reached without a verified identity");
            Err(AuthError::InsufficientRole)
        }
    }
}

/// Owner-or-admin predicate over the raw route parameter.
///
/// Admins pass without the parameter being parsed. For everyone else the
/// parameter must be a base-10 integer equal to the caller's id; anything
/// unparsable is denied.
pub fn authorize_owner_or_admin<'a>(
    identity: Option<&'a Identity>,
    resource_id: Option<&str>,
) -> Result<&'a Identity, AuthError> {
    let Some(identity) = identity else {
        tracing::debug!("Ownership check reached without a verified identity");
        return Err(AuthError::NotResourceOwner);
    };

    if identity.is_admin() {
        return Ok(identity);
    }

    let resource_id = resource_id
        .and_then(|raw| raw.parse::<i64>().ok())
        .ok_or_else(|| {
            tracing::debug!(user_id = identity.id, "Unparsable resource id");
            AuthError::MalformedRouteParameter
        })?;

    if identity.owns(resource_id) {
        Ok(identity)
    } else {
        tracing::debug!(
            user_id = identity.id,
            resource_id,
            "Caller does not own resource"
        );
        Err(AuthError::NotResourceOwner)
    }
}
