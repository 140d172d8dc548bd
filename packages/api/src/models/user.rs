//! # User model
//!
//! The complete `users` row, loaded via [`sqlx::FromRow`]. It carries the
//! Argon2 PHC password hash and audit timestamps, neither of which may ever
//! reach the client — the auth handlers only hand out a bearer token and a
//! confirmation message, never the row itself.

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
