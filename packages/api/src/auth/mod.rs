//! Authentication: password hashing and bearer tokens.

#[cfg(feature = "server")]
mod password;
#[cfg(feature = "server")]
mod token;

#[cfg(feature = "server")]
pub use password::{hash_password, verify_password};
#[cfg(feature = "server")]
pub use token::{issue_token, verify_token, Claims};

/// Errors from the hashing and token paths. These never reach the client
/// verbatim; handlers map them to generic `{message}` responses.
#[cfg(feature = "server")]
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("failed to hash password: {0}")]
    Hash(String),

    #[error("invalid password hash: {0}")]
    InvalidHash(String),

    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}
