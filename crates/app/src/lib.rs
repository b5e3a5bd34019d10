//! AgriLoop application composition root
//!
//! Composes the domain routers behind AuthGate into a single application.

use agriloop_auth::{AuthConfig, AuthGate};
use agriloop_common::{Config, LogFormat};
use agriloop_users::{UserRepository, UsersState};
use axum::{http::HeaderValue, Router};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing_subscriber::EnvFilter;

/// Create the main application router with all routes
pub fn create_app(config: &Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    let auth_config = AuthConfig::try_from(config)?;
    let auth = AuthGate::from_config(&auth_config);

    let users_state = UsersState {
        users: UserRepository::new(pool),
        auth,
    };

    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "AgriLoop API v0.0.1-SNAPSHOT" }),
        )
        .merge(agriloop_users::routes(&users_state).with_state(users_state));

    Ok(app)
}

/// CORS policy: permissive when no origins are configured, otherwise an
/// explicit allow-list. Unparsable origins are skipped with a warning.
pub fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}

/// Install the global tracing subscriber
#[mutants::skip] // Global side effect only
pub fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
