//! # API crate — shared types and server logic for TaskNet
//!
//! This crate is shared between the web client and the server. It defines the
//! wire types for every REST endpoint, the client-side form validation that
//! runs before a request is ever constructed, and the pure filter/sort/search
//! engine the dashboard applies to its fetched task list.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | partly `server` | Argon2 password hashing and JWT bearer tokens |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`error`] | `server` | [`error::ApiError`], mapped to JSON `{message}` responses |
//! | [`models`] | partly `server` | Database rows (`User`, `Task`) and their client-safe projections |
//! | [`query`] | — | Client-side status filter, substring search, and stable sort |
//! | [`routes`] | `server` | axum router for `/auth/*` and `/task*` endpoints |
//!
//! Everything behind the `server` feature pulls in sqlx, axum, and tokio;
//! client (WASM) builds see only the plain serde types.

use serde::{Deserialize, Serialize};

pub mod auth;
#[cfg(feature = "server")]
pub mod db;
#[cfg(feature = "server")]
pub mod error;
pub mod models;
pub mod query;
#[cfg(feature = "server")]
pub mod routes;

pub use models::TaskInfo;
pub use query::{SortKey, SortOrder, StatusFilter, TaskQuery};

/// Body of `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    /// Validate the registration form before any request is sent.
    ///
    /// `confirm_password` never crosses the wire; it only exists in the form.
    pub fn validate(&self, confirm_password: &str) -> Result<(), String> {
        if self.first_name.trim().is_empty()
            || self.last_name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
            || confirm_password.is_empty()
        {
            return Err("All fields are required.".to_string());
        }
        if self.password != confirm_password {
            return Err("Passwords do not match".to_string());
        }
        if self.password.len() < 8 {
            return Err("Password must be at least 8 characters".to_string());
        }
        Ok(())
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Validate the login form before any request is sent.
    pub fn validate(&self) -> Result<(), String> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err("All fields are required.".to_string());
        }
        Ok(())
    }
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub token: String,
}

/// Generic `{message}` payload, used for confirmations and errors alike.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

/// Response of `GET /api/tasks`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskListResponse {
    pub tasks: Vec<TaskInfo>,
}

/// Body of `POST /api/task/add-task` and of a full edit via
/// `PUT /api/task/update-task/:id`. A completion toggle sends no body at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskPayload {
    pub title: String,
    pub description: String,
}

impl TaskPayload {
    /// A task needs a title; the description may be empty.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register() -> RegisterRequest {
        RegisterRequest {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "correct horse".into(),
        }
    }

    #[test]
    fn register_accepts_valid_form() {
        assert!(register().validate("correct horse").is_ok());
    }

    #[test]
    fn register_rejects_short_password() {
        let mut req = register();
        req.password = "1234567".into();
        let err = req.validate("1234567").unwrap_err();
        assert_eq!(err, "Password must be at least 8 characters");
    }

    #[test]
    fn register_accepts_exactly_eight_characters() {
        let mut req = register();
        req.password = "12345678".into();
        assert!(req.validate("12345678").is_ok());
    }

    #[test]
    fn register_rejects_mismatched_confirmation() {
        let err = register().validate("something else").unwrap_err();
        assert_eq!(err, "Passwords do not match");
    }

    #[test]
    fn register_rejects_missing_fields() {
        let mut req = register();
        req.email = "  ".into();
        assert_eq!(
            req.validate("correct horse").unwrap_err(),
            "All fields are required."
        );
    }

    #[test]
    fn login_rejects_empty_fields() {
        let req = LoginRequest {
            email: String::new(),
            password: "pw".into(),
        };
        assert!(req.validate().is_err());

        let req = LoginRequest {
            email: "ada@example.com".into(),
            password: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn task_payload_requires_title() {
        let payload = TaskPayload {
            title: "  ".into(),
            description: "whatever".into(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn register_serializes_camel_case() {
        let json = serde_json::to_value(register()).unwrap();
        assert!(json.get("firstName").is_some());
        assert!(json.get("lastName").is_some());
        assert!(json.get("first_name").is_none());
    }
}
