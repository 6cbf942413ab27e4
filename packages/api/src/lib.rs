//! # API crate — accounts, sessions and notes
//!
//! Everything the notes service knows about its data lives here; the `web` crate only
//! adds pages, configuration and the server itself.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Argon2id password hashing, registration and login checks, session keys, flash messages, the [`auth::CurrentUser`] guard |
//! | [`db`] | SQLite pool construction and schema bootstrap |
//! | [`models`] | `User` and `Note` rows with their owner-scoped queries |
//! | [`notes`] | The `/api/note*` JSON endpoints |
//! | [`error`] | [`ApiError`] (JSON error responses) and [`AuthError`] (user-facing auth outcomes) |
//!
//! ## JSON endpoints
//!
//! - `POST /api/note` → `{"ok": true, "id": <id>}`
//! - `PUT /api/note/{id}` → `{"ok": true}`
//! - `DELETE /api/note/{id}` → `{"ok": true}`
//! - `GET /api/notes` → `[{"id", "title", "updated_at"}]`, most recently updated first
//!
//! All four require a logged-in session and answer 401 otherwise. A note that is
//! missing or owned by someone else is a 404 either way.

use sqlx::SqlitePool;

pub mod auth;
pub mod db;
pub mod error;
pub mod models;
pub mod notes;

pub use error::{ApiError, AuthError};
pub use models::{Note, NoteSummary, User, UserInfo};

/// Handles shared by every request: built once at startup, cloned into handlers.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}
