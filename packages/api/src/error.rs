//! # API error type
//!
//! Every REST handler returns `Result<_, ApiError>`. The `IntoResponse` impl
//! maps each variant to a status code and the JSON `{message}` body the
//! client's error path extracts. Database and auth internals are logged and
//! collapsed into a generic 500 so they never leak to the browser.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::auth::AuthError;
use crate::MessageResponse;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Task not found")]
    TaskNotFound,

    #[error("An account with this email already exists")]
    EmailTaken,

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl ApiError {
    /// Map a failed user INSERT to the conflict it represents.
    ///
    /// The register handler checks for an existing email first, but two
    /// concurrent registrations can both pass that check; the loser then
    /// trips the `users.email` UNIQUE constraint. That is still "email
    /// taken", not an internal error.
    pub fn email_conflict(err: sqlx::Error) -> ApiError {
        match err.as_database_error() {
            Some(db) if db.is_unique_violation() => ApiError::EmailTaken,
            _ => ApiError::Database(err),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::TaskNotFound => StatusCode::NOT_FOUND,
            ApiError::EmailTaken => StatusCode::CONFLICT,
            ApiError::Database(_) | ApiError::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("internal error: {self}");
            "Something went wrong".to_string()
        } else {
            self.to_string()
        };
        (status, Json(MessageResponse { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::error::Error as StdError;
    use std::fmt;

    #[derive(Debug)]
    struct ConstraintViolation(ErrorKind);

    impl fmt::Display for ConstraintViolation {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "constraint violation")
        }
    }

    impl StdError for ConstraintViolation {}

    impl DatabaseError for ConstraintViolation {
        fn message(&self) -> &str {
            "constraint violation"
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            match self.0 {
                ErrorKind::UniqueViolation => ErrorKind::UniqueViolation,
                _ => ErrorKind::CheckViolation,
            }
        }
    }

    #[test]
    fn unique_violation_on_insert_is_a_conflict() {
        let err = sqlx::Error::Database(Box::new(ConstraintViolation(ErrorKind::UniqueViolation)));
        let mapped = ApiError::email_conflict(err);
        assert!(matches!(mapped, ApiError::EmailTaken));
        assert_eq!(mapped.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn other_database_errors_stay_internal() {
        let err = sqlx::Error::Database(Box::new(ConstraintViolation(ErrorKind::CheckViolation)));
        let mapped = ApiError::email_conflict(err);
        assert!(matches!(mapped, ApiError::Database(_)));
        assert_eq!(mapped.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn non_database_errors_stay_internal() {
        let mapped = ApiError::email_conflict(sqlx::Error::RowNotFound);
        assert!(matches!(mapped, ApiError::Database(_)));
    }

    #[test]
    fn statuses_match_variants() {
        assert_eq!(
            ApiError::Validation("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthorized("x".into()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::TaskNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::EmailTaken.status(), StatusCode::CONFLICT);
    }
}
