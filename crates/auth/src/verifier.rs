//! Token verification and bearer credential extraction

use axum::http::HeaderValue;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::claims::IdentityClaims;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Verifies a raw credential and decodes its claims.
///
/// Implementations must be pure: the same token yields the same outcome for
/// as long as the token's own expiry allows.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<IdentityClaims, AuthError>;
}

/// HS256 JWT verifier keyed by the configured secret
#[derive(Clone)]
pub struct JwtVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_nbf = true;

        // set_issuer/set_audience alone accept a token that omits the claim
        let mut required = vec!["exp"];

        if let Some(aud) = &config.audience {
            validation.set_audience(&[aud]);
            required.push("aud");
        } else {
            validation.validate_aud = false;
        }

        if let Some(iss) = &config.issuer {
            validation.set_issuer(&[iss]);
            required.push("iss");
        }

        validation.set_required_spec_claims(&required);

        Self {
            decoding_key: DecodingKey::from_secret(config.secret()),
            validation,
        }
    }
}

impl TokenVerifier for JwtVerifier {
    fn verify(&self, token: &str) -> Result<IdentityClaims, AuthError> {
        decode::<IdentityClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                // kind only; the token itself is never logged
                tracing::debug!(error_kind = ?e.kind(), "JWT validation failed");
                AuthError::VerificationFailure
            })
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
///
/// The scheme is matched case-insensitively. `Bearer` with nothing after it
/// counts as no token at all; any other scheme, or a token with embedded
/// whitespace, is malformed.
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<&str, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::MalformedCredential)?
        .trim();

    let (scheme, token) = header_str.split_once(' ').unwrap_or((header_str, ""));

    if !scheme.eq_ignore_ascii_case("Bearer") {
        return Err(AuthError::MalformedCredential);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::MissingCredential);
    }
    if token.contains(char::is_whitespace) {
        return Err(AuthError::MalformedCredential);
    }

    Ok(token)
}
