//! Request guard for routes that need a logged-in user.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tower_sessions::Session;

use super::session::session_user_id;
use crate::error::ApiError;
use crate::models::User;
use crate::AppState;

/// The user behind the current session.
///
/// Extraction fails with [`ApiError::Unauthorized`] when there is no login, or when
/// the session points at a user that no longer exists. JSON routes let that
/// rejection render as a 401; page routes wrap it and redirect instead.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::SessionUnavailable)?;

        let Some(user_id) = session_user_id(&session).await? else {
            return Err(ApiError::Unauthorized);
        };

        let state = AppState::from_ref(state);
        let user = User::find(user_id, &state.pool)
            .await?
            .ok_or(ApiError::Unauthorized)?;

        Ok(CurrentUser(user))
    }
}
