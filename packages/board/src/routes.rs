//! JSON API over the `messages` table, plus the index page and its script.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::info;

use crate::error::ApiError;
use crate::models::{Message, MessageDraft};
use crate::views;
use crate::AppState;

const APP_JS: &str = include_str!("../assets/app.js");

pub async fn index() -> Html<String> {
    Html(views::index_page())
}

pub async fn app_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript; charset=utf-8")], APP_JS)
}

pub async fn list_messages(State(state): State<AppState>) -> Result<Json<Vec<Message>>, ApiError> {
    Ok(Json(Message::list(&state.pool).await?))
}

pub async fn create_message(
    State(state): State<AppState>,
    payload: Result<Json<MessageDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let Json(draft) = payload?;
    let (name, body) = draft.required_fields().ok_or(ApiError::MissingFields)?;

    let message = Message::insert(name, body, Utc::now(), &state.pool).await?;
    info!(id = message.id, "message created");
    Ok((StatusCode::CREATED, Json(message)))
}

pub async fn get_message(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Message>, ApiError> {
    let Path(id) = id?;
    Message::find(id, &state.pool)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn update_message(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<MessageDraft>, JsonRejection>,
) -> Result<Json<Message>, ApiError> {
    let Path(id) = id?;
    let Json(draft) = payload?;
    let name = draft.name.as_deref().map(str::trim);
    let body = draft.body.as_deref().map(str::trim);

    Message::update(id, name, body, &state.pool)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn delete_message(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let Path(id) = id?;
    if !Message::delete(id, &state.pool).await? {
        return Err(ApiError::NotFound);
    }
    info!(id, "message deleted");
    Ok(Json(json!({ "result": "deleted" })))
}
