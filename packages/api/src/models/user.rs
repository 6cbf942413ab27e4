//! # User model
//!
//! Defines the two representations of an account:
//!
//! ## [`User`]
//!
//! The complete row from the `users` table, loaded with [`sqlx::FromRow`]:
//!
//! - `id` — integer primary key.
//! - `username` — unique login name, stored trimmed.
//! - `password_hash` — Argon2id PHC string, kept in the `password` column. The
//!   plaintext password is never stored.
//!
//! Users are created at registration and never modified afterwards.
//!
//! ## [`UserInfo`]
//!
//! The subset that is safe to render or serialize: no password hash.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// Full user record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[sqlx(rename = "password")]
    pub password_hash: String,
}

impl User {
    pub async fn find(id: i64, pool: &SqlitePool) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as("SELECT id, username, password FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_username(
        username: &str,
        pool: &SqlitePool,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as("SELECT id, username, password FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new account. Fails with a unique violation if the username is taken.
    pub async fn insert(
        username: &str,
        password_hash: &str,
        pool: &SqlitePool,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as(
            "INSERT INTO users (username, password) VALUES (?, ?) RETURNING id, username, password",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(pool)
        .await
    }

    /// Convert to UserInfo for rendering.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            username: self.username.clone(),
        }
    }
}

/// User information safe to show to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
}
