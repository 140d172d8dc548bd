//! Task CRUD handlers. All of them require a bearer token and touch only the
//! caller's rows.

use axum::body::Bytes;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use super::AuthUser;
use crate::db::get_pool;
use crate::error::ApiError;
use crate::models::{Task, TaskInfo};
use crate::{MessageResponse, TaskListResponse, TaskPayload};

/// `GET /tasks` — the caller's full task list, oldest first. No pagination.
pub async fn list_tasks(user: AuthUser) -> Result<Json<TaskListResponse>, ApiError> {
    let pool = get_pool().await?;

    let tasks: Vec<Task> =
        sqlx::query_as("SELECT * FROM tasks WHERE user_id = $1 ORDER BY created_at")
            .bind(user.id)
            .fetch_all(pool)
            .await?;

    Ok(Json(TaskListResponse {
        tasks: tasks.iter().map(Task::to_info).collect(),
    }))
}

/// `POST /task/add-task`
pub async fn add_task(
    user: AuthUser,
    Json(payload): Json<TaskPayload>,
) -> Result<(StatusCode, Json<TaskInfo>), ApiError> {
    payload.validate().map_err(ApiError::Validation)?;

    let pool = get_pool().await?;

    let task: Task = sqlx::query_as(
        "INSERT INTO tasks (user_id, title, description) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(user.id)
    .bind(payload.title.trim())
    .bind(&payload.description)
    .fetch_one(pool)
    .await?;

    tracing::debug!(task_id = %task.id, "created task");

    Ok((StatusCode::CREATED, Json(task.to_info())))
}

/// `PUT /task/update-task/:id`
///
/// Two contracts on one route: a JSON `{title, description}` body edits those
/// fields; an empty body marks the task completed. The completion transition
/// is one-directional, there is no reopen.
pub async fn update_task(
    user: AuthUser,
    Path(id): Path<Uuid>,
    body: Bytes,
) -> Result<Json<TaskInfo>, ApiError> {
    let pool = get_pool().await?;

    let task: Option<Task> = if body.is_empty() {
        sqlx::query_as(
            "UPDATE tasks SET completed = TRUE WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(user.id)
        .fetch_optional(pool)
        .await?
    } else {
        let payload: TaskPayload = serde_json::from_slice(&body)
            .map_err(|_| ApiError::Validation("Invalid task payload".to_string()))?;
        payload.validate().map_err(ApiError::Validation)?;

        sqlx::query_as(
            "UPDATE tasks SET title = $3, description = $4 \
             WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(user.id)
        .bind(payload.title.trim())
        .bind(&payload.description)
        .fetch_optional(pool)
        .await?
    };

    // A row owned by someone else looks the same as a missing one.
    let task = task.ok_or(ApiError::TaskNotFound)?;

    Ok(Json(task.to_info()))
}

/// `DELETE /task/delete-task/:id`
pub async fn delete_task(
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let pool = get_pool().await?;

    let deleted: Option<(Uuid,)> =
        sqlx::query_as("DELETE FROM tasks WHERE id = $1 AND user_id = $2 RETURNING id")
            .bind(id)
            .bind(user.id)
            .fetch_optional(pool)
            .await?;

    if deleted.is_none() {
        return Err(ApiError::TaskNotFound);
    }

    tracing::debug!(task_id = %id, "deleted task");

    Ok(Json(MessageResponse {
        message: "Task deleted".to_string(),
    }))
}
