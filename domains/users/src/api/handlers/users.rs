//! User management API handlers
//!
//! - GET /api/users - list users (admin, guarded by middleware)
//! - GET /api/users/{id} - get one user (owner or admin)
//! - PATCH /api/users/{id} - update name/location (owner or admin)
//! - DELETE /api/users/{id} - delete a user (admin)

use agriloop_auth::{AdminUser, OwnerOrAdmin};
use agriloop_common::{Error, Pagination, RepositoryError, Result, ValidatedJson};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::api::middleware::UsersState;
use crate::User;

/// Request for updating a user profile
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 120))]
    pub location: Option<String>,
}

fn user_not_found(err: RepositoryError) -> Error {
    match err {
        RepositoryError::NotFound => Error::NotFound("User not found".to_string()),
        other => other.into(),
    }
}

/// GET /api/users
pub async fn list_users(
    State(state): State<UsersState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<User>>> {
    let users = state
        .users
        .list(pagination.offset(), pagination.limit())
        .await?;

    Ok(Json(users))
}

/// GET /api/users/{id}
pub async fn get_user(
    _caller: OwnerOrAdmin,
    State(state): State<UsersState>,
    Path(user_id): Path<i64>,
) -> Result<Json<User>> {
    let user = state
        .users
        .get_by_id(user_id)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

/// PATCH /api/users/{id}
pub async fn update_user(
    OwnerOrAdmin(caller): OwnerOrAdmin,
    State(state): State<UsersState>,
    Path(user_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<User>> {
    let user = state
        .users
        .update_profile(
            user_id,
            request.name.as_deref(),
            request.location.as_deref(),
        )
        .await
        .map_err(user_not_found)?;

    tracing::info!(user_id, updated_by = caller.id, "User profile updated");

    Ok(Json(user))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    AdminUser(admin): AdminUser,
    State(state): State<UsersState>,
    Path(user_id): Path<i64>,
) -> Result<StatusCode> {
    state
        .users
        .delete(user_id)
        .await
        .map_err(user_not_found)?;

    tracing::info!(user_id, deleted_by = admin.id, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}
