//! Authentication configuration

use agriloop_common::{Config, ConfigError};

/// Token verification settings. Construction rejects an empty secret.
#[derive(Clone)]
pub struct AuthConfig {
    jwt_secret: String,
    pub issuer: Option<String>,
    pub audience: Option<String>,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Result<Self, ConfigError> {
        let jwt_secret = jwt_secret.into();
        if jwt_secret.trim().is_empty() {
            return Err(ConfigError::Empty("JWT_SECRET"));
        }

        Ok(Self {
            jwt_secret,
            issuer: None,
            audience: None,
        })
    }

    pub fn with_issuer(mut self, issuer: Option<String>) -> Self {
        self.issuer = issuer;
        self
    }

    pub fn with_audience(mut self, audience: Option<String>) -> Self {
        self.audience = audience;
        self
    }

    pub(crate) fn secret(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }
}

impl TryFrom<&Config> for AuthConfig {
    type Error = ConfigError;

    fn try_from(config: &Config) -> Result<Self, Self::Error> {
        Ok(AuthConfig::new(config.jwt_secret.clone())?
            .with_issuer(config.jwt_issuer.clone())
            .with_audience(config.jwt_audience.clone()))
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish()
    }
}
