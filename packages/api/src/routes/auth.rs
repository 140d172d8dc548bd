//! Registration and login handlers.

use axum::http::StatusCode;
use axum::Json;

use crate::auth::{hash_password, issue_token, verify_password};
use crate::db::get_pool;
use crate::error::ApiError;
use crate::models::User;
use crate::{LoginRequest, MessageResponse, RegisterRequest, TokenResponse};

/// `POST /auth/register`
///
/// Validation mirrors the client-side checks so a handcrafted request gets
/// the same answers as the form.
pub async fn register(
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let email = req.email.trim().to_lowercase();
    let first_name = req.first_name.trim().to_string();
    let last_name = req.last_name.trim().to_string();

    if first_name.is_empty() || last_name.is_empty() || email.is_empty() || req.password.is_empty()
    {
        return Err(ApiError::Validation("All fields are required.".to_string()));
    }
    if !email.contains('@') {
        return Err(ApiError::Validation("Invalid email address".to_string()));
    }
    if req.password.len() < 8 {
        return Err(ApiError::Validation(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    let pool = get_pool().await?;

    // Early rejection for the common case; a concurrent registration can
    // still slip past this and hit the UNIQUE constraint on the INSERT.
    let existing: Option<(i32,)> = sqlx::query_as("SELECT 1 AS n FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?;
    if existing.is_some() {
        return Err(ApiError::EmailTaken);
    }

    let password_hash = hash_password(&req.password)?;

    let user: User = sqlx::query_as(
        "INSERT INTO users (email, first_name, last_name, password_hash) \
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(&email)
    .bind(&first_name)
    .bind(&last_name)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(ApiError::email_conflict)?;

    tracing::info!(user_id = %user.id, "registered new user");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created successfully".to_string(),
        }),
    ))
}

/// `POST /auth/login`
///
/// Missing account and wrong password produce the same message, so the
/// endpoint cannot be used to probe which emails exist.
pub async fn login(Json(req): Json<LoginRequest>) -> Result<Json<TokenResponse>, ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    let email = req.email.trim().to_lowercase();
    let pool = get_pool().await?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?;

    let Some(user) = user else {
        return Err(ApiError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    };

    if !verify_password(&req.password, &user.password_hash)? {
        return Err(ApiError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let token = issue_token(&user)?;
    tracing::info!(user_id = %user.id, "user logged in");

    Ok(Json(TokenResponse { token }))
}
