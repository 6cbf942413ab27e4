//! HTML page handlers: landing, registration, login/logout, dashboard and editor.

use api::auth::{self, flash, take_flashes, Flash};
use api::{AppState, AuthError, Note};
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::header,
    response::{Html, IntoResponse, Redirect},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::info;

use crate::error::PageError;
use crate::guard::PageUser;
use crate::views;

const MAIN_JS: &str = include_str!("../assets/main.js");

/// Form body of `/register` and `/login`.
#[derive(Debug, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

pub async fn index(State(state): State<AppState>, session: Session) -> Result<Html<String>, PageError> {
    let flashes = take_flashes(&session).await?;
    let user = match auth::session_user_id(&session).await? {
        Some(id) => api::User::find(id, &state.pool).await?.map(|u| u.to_info()),
        None => None,
    };
    Ok(Html(views::home_page(flashes, user)))
}

pub async fn register_form(session: Session) -> Result<Html<String>, PageError> {
    let flashes = take_flashes(&session).await?;
    Ok(Html(views::register_page(flashes)))
}

pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<Credentials>,
) -> Result<Redirect, PageError> {
    match auth::register(&form.username, &form.password, &state.pool).await {
        Ok(_) => {
            flash(&session, Flash::new("success", "Account created. Please log in.")).await?;
            Ok(Redirect::to("/login"))
        }
        Err(AuthError::Internal(e)) => Err(e.into()),
        Err(e) => {
            flash(&session, Flash::new("danger", e.to_string())).await?;
            Ok(Redirect::to("/register"))
        }
    }
}

pub async fn login_form(session: Session) -> Result<Html<String>, PageError> {
    let flashes = take_flashes(&session).await?;
    Ok(Html(views::login_page(flashes)))
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<Credentials>,
) -> Result<Redirect, PageError> {
    match auth::authenticate(&form.username, &form.password, &state.pool).await {
        Ok(user) => {
            auth::log_in(&session, &user).await?;
            info!(user_id = user.id, "logged in");
            flash(&session, Flash::new("success", "Logged in successfully")).await?;
            Ok(Redirect::to("/dashboard"))
        }
        Err(AuthError::Internal(e)) => Err(e.into()),
        Err(e) => {
            flash(&session, Flash::new("danger", e.to_string())).await?;
            Ok(Redirect::to("/login"))
        }
    }
}

pub async fn logout(PageUser(user): PageUser, session: Session) -> Result<Redirect, PageError> {
    auth::log_out(&session).await?;
    info!(user_id = user.id, "logged out");
    flash(&session, Flash::new("info", "Logged out")).await?;
    Ok(Redirect::to("/"))
}

pub async fn dashboard(
    State(state): State<AppState>,
    PageUser(user): PageUser,
    session: Session,
) -> Result<Html<String>, PageError> {
    let notes = Note::list_by_owner(user.id, &state.pool).await?;
    let flashes = take_flashes(&session).await?;
    Ok(Html(views::notes_page(flashes, user.to_info(), notes)))
}

pub async fn new_note(PageUser(user): PageUser, session: Session) -> Result<Html<String>, PageError> {
    let flashes = take_flashes(&session).await?;
    Ok(Html(views::note_page(flashes, user.to_info(), None)))
}

pub async fn edit_note(
    State(state): State<AppState>,
    PageUser(user): PageUser,
    session: Session,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Html<String>, PageError> {
    let Path(id) = id?;
    let note = Note::find_owned(id, user.id, &state.pool)
        .await?
        .ok_or(PageError::NotFound)?;
    let flashes = take_flashes(&session).await?;
    Ok(Html(views::note_page(flashes, user.to_info(), Some(note))))
}

pub async fn main_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript; charset=utf-8")], MAIN_JS)
}

pub async fn not_found() -> PageError {
    PageError::NotFound
}
