//! Middleware front-end for the AuthGate pipeline
//!
//! Chain these with `from_fn_with_state` / `from_fn` when a whole router
//! (or a route group) shares one guard:
//! ```ignore
//! Router::new()
//!     .route("/api/users", get(list_users))
//!     .route_layer(axum::middleware::from_fn(require_admin))
//!     .route_layer(axum::middleware::from_fn_with_state(gate, authenticate))
//! ```
//! Layers run outside-in, so `authenticate` must be the outermost.

use std::collections::HashMap;

use axum::{
    extract::{FromRequestParts, Path, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::error::AuthError;
use crate::gate::{authorize_admin, authorize_owner_or_admin, AuthGate, RESOURCE_ID_PARAM};
use crate::identity::Identity;

/// Verify the bearer credential and attach the [`Identity`] to the request
pub async fn authenticate(
    State(gate): State<AuthGate>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let identity = gate.authenticate(request.headers())?;
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

/// Let the request through only for admins
pub async fn require_admin(request: Request, next: Next) -> Result<Response, AuthError> {
    authorize_admin(request.extensions().get::<Identity>())?;

    Ok(next.run(request).await)
}

/// Let the request through for admins and for the owner of `{id}`
pub async fn require_owner_or_admin(request: Request, next: Next) -> Result<Response, AuthError> {
    let (mut parts, body) = request.into_parts();

    let resource_id = resource_id_param(&mut parts).await;
    authorize_owner_or_admin(parts.extensions.get::<Identity>(), resource_id.as_deref())?;

    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Raw `{id}` route parameter, if the matched route has one
pub(crate) async fn resource_id_param(parts: &mut Parts) -> Option<String> {
    let Path(mut params) = Path::<HashMap<String, String>>::from_request_parts(parts, &())
        .await
        .ok()?;
    params.remove(RESOURCE_ID_PARAM)
}
