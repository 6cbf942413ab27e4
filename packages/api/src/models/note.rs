//! # Note model
//!
//! A [`Note`] always belongs to exactly one user. Every query in this file takes the
//! owner's id and filters on it, so a note belonging to someone else behaves exactly
//! like a note that does not exist.
//!
//! [`NoteSummary`] is the listing projection (no content). [`NoteDraft`] is the JSON
//! payload accepted by create and update:
//!
//! - `title` counts only when it is a non-empty string; otherwise create uses
//!   [`DEFAULT_TITLE`] and update keeps the stored title. Titles are cut to
//!   [`MAX_TITLE_CHARS`] characters.
//! - `content` counts whenever the key is present, so `""` (or `null`) clears it and
//!   an absent key leaves it alone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::{FromRow, SqlitePool};

pub const DEFAULT_TITLE: &str = "Untitled";
pub const MAX_TITLE_CHARS: usize = 255;

/// Full note record.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
    pub updated_at: DateTime<Utc>,
}

/// Note listing entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct NoteSummary {
    pub id: i64,
    pub title: String,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub content: Option<Option<String>>,
}

/// Distinguishes an explicit `null` (`Some(None)`) from a missing key (`None`).
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn truncate_title(title: &str) -> String {
    title.chars().take(MAX_TITLE_CHARS).collect()
}

impl NoteDraft {
    /// The replacement title, if the payload carries a usable one.
    pub fn title(&self) -> Option<String> {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(truncate_title)
    }

    /// The replacement content, if the `content` key was sent at all.
    pub fn content(&self) -> Option<&str> {
        self.content
            .as_ref()
            .map(|c| c.as_deref().unwrap_or_default())
    }
}

impl Note {
    pub async fn find_owned(
        id: i64,
        owner: i64,
        pool: &SqlitePool,
    ) -> Result<Option<Note>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, title, content, user_id, updated_at FROM notes WHERE id = ? AND user_id = ?",
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(pool)
        .await
    }

    /// The owner's notes, most recently updated first.
    pub async fn list_by_owner(
        owner: i64,
        pool: &SqlitePool,
    ) -> Result<Vec<NoteSummary>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, title, updated_at FROM notes WHERE user_id = ? \
             ORDER BY updated_at DESC, id DESC",
        )
        .bind(owner)
        .fetch_all(pool)
        .await
    }

    /// Insert a note built from `draft` and return its id.
    pub async fn insert(
        owner: i64,
        draft: &NoteDraft,
        now: DateTime<Utc>,
        pool: &SqlitePool,
    ) -> Result<i64, sqlx::Error> {
        let title = draft.title().unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let content = draft.content().unwrap_or_default();

        sqlx::query_scalar(
            "INSERT INTO notes (title, content, user_id, updated_at) VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(title)
        .bind(content)
        .bind(owner)
        .bind(now)
        .fetch_one(pool)
        .await
    }

    /// Apply `draft` to an owned note and touch `updated_at`.
    /// Returns `false` when no note with this id belongs to `owner`.
    pub async fn update_owned(
        id: i64,
        owner: i64,
        draft: &NoteDraft,
        now: DateTime<Utc>,
        pool: &SqlitePool,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notes SET title = COALESCE(?, title), content = COALESCE(?, content), \
             updated_at = ? WHERE id = ? AND user_id = ?",
        )
        .bind(draft.title())
        .bind(draft.content())
        .bind(now)
        .bind(id)
        .bind(owner)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_owned(id: i64, owner: i64, pool: &SqlitePool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(owner)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
