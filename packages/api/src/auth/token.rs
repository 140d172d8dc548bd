//! # Bearer tokens — JWT issuance and verification
//!
//! Login returns an HS256 JWT that the client stores and presents as
//! `Authorization: Bearer <token>` on every authenticated request. Claims are
//! the standard `sub` (user id), `iat`, `exp`, plus the user's email. Tokens
//! live for [`TOKEN_TTL_DAYS`] days; the signing secret comes from the
//! `JWT_SECRET` environment variable, with an obviously-unfit development
//! fallback.
//!
//! The client treats the token as opaque: no structure or expiry inspection
//! happens on that side, it just round-trips the string.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::AuthError;
use crate::models::User;

/// How long an issued token stays valid, in days.
pub const TOKEN_TTL_DAYS: i64 = 7;

/// Claims embedded in every TaskNet bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id (UUID as string).
    pub sub: String,
    pub email: String,
    /// Issued at (unix timestamp).
    pub iat: i64,
    /// Expiry (unix timestamp).
    pub exp: i64,
}

fn jwt_secret() -> String {
    dotenvy::dotenv().ok();
    std::env::var("JWT_SECRET").unwrap_or_else(|_| "change-me-in-production".to_string())
}

/// Issue a token for a freshly authenticated user.
pub fn issue_token(user: &User) -> Result<String, AuthError> {
    issue_with_ttl(&user.id.to_string(), &user.email, Duration::days(TOKEN_TTL_DAYS))
}

fn issue_with_ttl(sub: &str, email: &str, ttl: Duration) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = Claims {
        sub: sub.to_string(),
        email: email.to_string(),
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret().as_bytes()),
    )?;
    Ok(token)
}

/// Verify a presented bearer token and return its claims.
pub fn verify_token(token: &str) -> Result<Claims, AuthError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret().as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_and_verify_round_trip() {
        let token =
            issue_with_ttl("user-1", "ada@example.com", Duration::days(TOKEN_TTL_DAYS)).unwrap();
        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.email, "ada@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn tampered_token_is_rejected() {
        let mut token =
            issue_with_ttl("user-1", "ada@example.com", Duration::days(TOKEN_TTL_DAYS)).unwrap();
        token.push('x');
        assert!(verify_token(&token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        // Well past the default validation leeway.
        let token = issue_with_ttl("user-1", "ada@example.com", Duration::hours(-2)).unwrap();
        assert!(verify_token(&token).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(verify_token("not.a.jwt").is_err());
    }
}
