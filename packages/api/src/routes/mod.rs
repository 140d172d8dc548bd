//! # REST routes
//!
//! The canonical endpoint set, mounted by the web server under `/api`:
//!
//! | Method | Path | Auth | Handler |
//! |--------|------|------|---------|
//! | POST | `/auth/register` | — | [`auth::register`] |
//! | POST | `/auth/login` | — | [`auth::login`] |
//! | GET | `/tasks` | bearer | [`tasks::list_tasks`] |
//! | POST | `/task/add-task` | bearer | [`tasks::add_task`] |
//! | PUT | `/task/update-task/:id` | bearer | [`tasks::update_task`] |
//! | DELETE | `/task/delete-task/:id` | bearer | [`tasks::delete_task`] |
//!
//! Authenticated handlers take the [`AuthUser`] extractor, which reads the
//! `Authorization: Bearer <token>` header, verifies the JWT, and yields the
//! owning user's id. Every task query is scoped by that id.

pub mod auth;
pub mod tasks;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts, HeaderMap};
use axum::routing::{delete, get, post, put};
use axum::Router;
use uuid::Uuid;

use crate::auth::verify_token;
use crate::error::ApiError;

/// Build the API router.
pub fn router() -> Router {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/tasks", get(tasks::list_tasks))
        .route("/task/add-task", post(tasks::add_task))
        .route("/task/update-task/:id", put(tasks::update_task))
        .route("/task/delete-task/:id", delete(tasks::delete_task))
}

/// The authenticated caller, extracted from the bearer token.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: Uuid,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)
            .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;
        let claims = verify_token(token)
            .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))?;
        let id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))?;
        Ok(AuthUser { id })
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_token_strips_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn missing_header_yields_none() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn non_bearer_scheme_yields_none() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwdw=="),
        );
        assert_eq!(bearer_token(&headers), None);
    }
}
