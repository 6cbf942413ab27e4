//! # Message model
//!
//! [`Message`] is both the `messages` row and the JSON object returned by every
//! endpoint. [`MessageDraft`] is the request payload for create and update; every
//! field is optional so the handlers decide what "missing" means.
//!
//! Queries are plain parameterized SQL, one statement per operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// A posted message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Message {
    pub id: i64,
    pub name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Request payload for `POST` and `PUT`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl MessageDraft {
    /// Trimmed `name` and `body`, or `None` if either is missing or blank.
    pub fn required_fields(&self) -> Option<(&str, &str)> {
        let name = self.name.as_deref().map(str::trim).unwrap_or_default();
        let body = self.body.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() || body.is_empty() {
            return None;
        }
        Some((name, body))
    }
}

impl Message {
    /// All messages, newest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Message>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, name, body, created_at FROM messages ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find(id: i64, pool: &SqlitePool) -> Result<Option<Message>, sqlx::Error> {
        sqlx::query_as("SELECT id, name, body, created_at FROM messages WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn insert(
        name: &str,
        body: &str,
        created_at: DateTime<Utc>,
        pool: &SqlitePool,
    ) -> Result<Message, sqlx::Error> {
        sqlx::query_as(
            "INSERT INTO messages (name, body, created_at) VALUES (?, ?, ?) \
             RETURNING id, name, body, created_at",
        )
        .bind(name)
        .bind(body)
        .bind(created_at)
        .fetch_one(pool)
        .await
    }

    /// Overwrite the given fields and keep the rest. `None` if the row does not exist.
    pub async fn update(
        id: i64,
        name: Option<&str>,
        body: Option<&str>,
        pool: &SqlitePool,
    ) -> Result<Option<Message>, sqlx::Error> {
        sqlx::query_as(
            "UPDATE messages SET name = COALESCE(?, name), body = COALESCE(?, body) \
             WHERE id = ? RETURNING id, name, body, created_at",
        )
        .bind(name)
        .bind(body)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Returns `false` if there was nothing to delete.
    pub async fn delete(id: i64, pool: &SqlitePool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM messages WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
