//! User entity as stored in the `users` table

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A row of `users`, minus credentials.
///
/// `id` is selected as `BIGINT` so both `SERIAL` and `BIGSERIAL` schemas map
/// onto the `i64` carried in tokens.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}
