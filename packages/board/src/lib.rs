//! # Board — a single-table message board
//!
//! A JSON API for posting, reading, editing and deleting short messages, plus a
//! server-rendered index page whose script talks to that API.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`settings`] | Layered configuration (defaults, `board.toml`, `BOARD_*` environment) |
//! | [`db`] | SQLite pool and schema bootstrap |
//! | [`models`] | The [`models::Message`] row and its queries |
//! | [`routes`] | Axum handlers |
//! | [`error`] | [`error::ApiError`] and its JSON rendering |
//! | [`views`] | The index page |

use axum::{routing::get, Router};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod settings;
pub mod views;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/static/app.js", get(routes::app_js))
        .route(
            "/api/messages",
            get(routes::list_messages).post(routes::create_message),
        )
        .route(
            "/api/messages/{id}",
            get(routes::get_message)
                .put(routes::update_message)
                .delete(routes::delete_message),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
