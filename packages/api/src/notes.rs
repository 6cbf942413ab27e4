//! JSON endpoints for the logged-in user's notes.
//!
//! Bodies are decoded as JSON whatever the `Content-Type` says. Every handler takes a
//! [`CurrentUser`], so an anonymous request is answered with 401 before any query
//! runs, and every query is filtered by that user's id.

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    routing::{get, post, put},
    Json, Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::info;

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::models::{Note, NoteDraft, NoteSummary};
use crate::AppState;

/// Routes under `/api` for notes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/note", post(create_note))
        .route("/api/note/{id}", put(update_note).delete(delete_note))
        .route("/api/notes", get(list_notes))
}

fn parse_draft(body: &Bytes) -> Result<NoteDraft, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::MalformedPayload(e.to_string()))
}

pub async fn create_note(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let draft = parse_draft(&body)?;
    let id = Note::insert(user.id, &draft, Utc::now(), &state.pool).await?;
    info!(user_id = user.id, note_id = id, "note created");
    Ok(Json(json!({ "ok": true, "id": id })))
}

pub async fn update_note(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    id: Result<Path<i64>, PathRejection>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let Path(id) = id?;
    let draft = parse_draft(&body)?;
    if !Note::update_owned(id, user.id, &draft, Utc::now(), &state.pool).await? {
        return Err(ApiError::NotFound);
    }
    Ok(Json(json!({ "ok": true })))
}

pub async fn delete_note(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let Path(id) = id?;
    if !Note::delete_owned(id, user.id, &state.pool).await? {
        return Err(ApiError::NotFound);
    }
    info!(user_id = user.id, note_id = id, "note deleted");
    Ok(Json(json!({ "ok": true })))
}

pub async fn list_notes(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<NoteSummary>>, ApiError> {
    Ok(Json(Note::list_by_owner(user.id, &state.pool).await?))
}
