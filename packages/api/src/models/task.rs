//! # Task model
//!
//! - [`Task`] (server only) — the `tasks` row. Every query against it is
//!   scoped by `user_id`; a task belongs to exactly one owner and only that
//!   owner may read, mutate, or delete it.
//! - [`TaskInfo`] — the canonical wire shape. One shape only: a boolean
//!   `completed` flag, camelCase field names, the id as a string.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full task record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Task {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub deadline: Option<DateTime<Utc>>,
    pub priority: Option<i32>,
}

#[cfg(feature = "server")]
impl Task {
    /// Convert to [`TaskInfo`] for client consumption. The owner id stays
    /// server-side.
    pub fn to_info(&self) -> TaskInfo {
        TaskInfo {
            id: self.id.to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            completed: self.completed,
            created_at: self.created_at,
            deadline: self.deadline,
            priority: self.priority,
        }
    }
}

/// Task information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub deadline: Option<DateTime<Utc>>,
    pub priority: Option<i32>,
}
