//! Authentication and authorization errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

const MSG_NO_TOKEN: &str = "Authentication required. No token provided.";
const MSG_INVALID_TOKEN: &str = "Invalid token. Authentication failed.";
const MSG_ADMIN_REQUIRED: &str = "Access denied. Admin privileges required.";
const MSG_NOT_AUTHORIZED: &str = "Access denied. Not authorized to access this resource.";

/// Why a request was turned away.
///
/// The variants are kept distinct for logs and tests. Responses collapse
/// them: every verification failure after the header was found answers with
/// the same 401 body, and each predicate has a single 403 body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("no bearer credential supplied")]
    MissingCredential,
    #[error("authorization header is not a bearer credential")]
    MalformedCredential,
    #[error("token failed verification")]
    VerificationFailure,
    #[error("caller is not an admin")]
    InsufficientRole,
    #[error("caller does not own the requested resource")]
    NotResourceOwner,
    #[error("route resource id is missing or not an integer")]
    MalformedRouteParameter,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingCredential
            | AuthError::MalformedCredential
            | AuthError::VerificationFailure => StatusCode::UNAUTHORIZED,
            AuthError::InsufficientRole
            | AuthError::NotResourceOwner
            | AuthError::MalformedRouteParameter => StatusCode::FORBIDDEN,
        }
    }

    /// Client-facing message
    pub fn message(&self) -> &'static str {
        match self {
            AuthError::MissingCredential => MSG_NO_TOKEN,
            AuthError::MalformedCredential | AuthError::VerificationFailure => MSG_INVALID_TOKEN,
            AuthError::InsufficientRole => MSG_ADMIN_REQUIRED,
            AuthError::NotResourceOwner | AuthError::MalformedRouteParameter => {
                MSG_NOT_AUTHORIZED
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "message": self.message() }));
        (self.status_code(), body).into_response()
    }
}
