//! AuthGate: request authentication and authorization for AgriLoop
//!
//! A request passes through a short pipeline: the bearer credential is
//! extracted, verified, and the decoded [`Identity`] is attached to the
//! request. Two predicates (admin-only, owner-or-admin) then decide whether
//! the caller may reach a handler.
//!
//! The pipeline is exposed twice over the same pure functions in [`gate`]:
//! as axum middleware layers ([`middleware`]) and as typed extractors
//! ([`AuthUser`], [`AdminUser`], [`OwnerOrAdmin`]) that work with any state
//! implementing `FromRef<S>` for [`AuthGate`].

mod claims;
mod config;
mod error;
mod extractors;
pub mod gate;
mod identity;
pub mod middleware;
mod verifier;

pub use claims::IdentityClaims;
pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::{AdminUser, AuthUser, OwnerOrAdmin};
pub use gate::{authorize_admin, authorize_owner_or_admin, AuthGate, RESOURCE_ID_PARAM};
pub use identity::{Identity, ADMIN_ROLE};
pub use verifier::{JwtVerifier, TokenVerifier};
