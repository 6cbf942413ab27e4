//! Login guard for HTML pages.

use api::auth::{flash, CurrentUser, Flash};
use api::{ApiError, AppState, User};
use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::warn;

use crate::error::PageError;

pub const LOGIN_REQUIRED_MESSAGE: &str = "Please log in to access this page.";

/// Like [`CurrentUser`], but an anonymous visitor is sent to `/login` with a flash
/// message instead of getting a JSON 401.
#[derive(Debug, Clone)]
pub struct PageUser(pub User);

impl<S> FromRequestParts<S> for PageUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match CurrentUser::from_request_parts(parts, state).await {
            Ok(CurrentUser(user)) => Ok(PageUser(user)),
            Err(ApiError::Unauthorized) => {
                if let Ok(session) = Session::from_request_parts(parts, state).await {
                    if let Err(e) = flash(&session, Flash::new("info", LOGIN_REQUIRED_MESSAGE)).await {
                        warn!("Failed to queue login flash: {}", e);
                    }
                }
                Err(Redirect::to("/login").into_response())
            }
            Err(e) => Err(PageError::from(e).into_response()),
        }
    }
}
