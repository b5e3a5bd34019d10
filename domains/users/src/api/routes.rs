//! Route definitions for the Users domain API
//!
//! Every route sits behind the `authenticate` middleware. The admin listing
//! is guarded by the `require_admin` layer; the per-user routes use the
//! `OwnerOrAdmin` / `AdminUser` extractors, which pick up the identity the
//! middleware attached.

use agriloop_auth::middleware::{authenticate, require_admin};
use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};

use super::handlers::{auth, users};
use super::middleware::UsersState;

fn user_routes() -> Router<UsersState> {
    Router::new()
        .route(
            "/api/users",
            get(users::list_users).route_layer(from_fn(require_admin)),
        )
        .route(
            "/api/users/{id}",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
}

fn auth_routes() -> Router<UsersState> {
    Router::new().route("/api/auth/me", get(auth::me))
}

/// Create all Users domain API routes
pub fn routes(state: &UsersState) -> Router<UsersState> {
    Router::new()
        .merge(user_routes())
        .merge(auth_routes())
        .route_layer(from_fn_with_state(state.auth.clone(), authenticate))
}
