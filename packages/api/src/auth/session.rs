//! Session keys, login state and one-shot flash messages.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::models::User;

/// Key for storing the user id in the session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Key for the pending flash messages.
pub const SESSION_FLASH_KEY: &str = "_flashes";

/// A message shown once on the next rendered page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flash {
    /// Styling hint: `"success"`, `"danger"` or `"info"`.
    pub category: String,
    pub message: String,
}

impl Flash {
    pub fn new(category: &str, message: impl Into<String>) -> Self {
        Self {
            category: category.to_string(),
            message: message.into(),
        }
    }
}

/// Queue a flash message for the next page render.
pub async fn flash(session: &Session, flash: Flash) -> Result<(), tower_sessions::session::Error> {
    let mut pending: Vec<Flash> = session.get(SESSION_FLASH_KEY).await?.unwrap_or_default();
    pending.push(flash);
    session.insert(SESSION_FLASH_KEY, pending).await
}

/// Drain every pending flash message.
pub async fn take_flashes(session: &Session) -> Result<Vec<Flash>, tower_sessions::session::Error> {
    Ok(session
        .remove::<Vec<Flash>>(SESSION_FLASH_KEY)
        .await?
        .unwrap_or_default())
}

/// Bind the session to `user`. The session id is rotated first so an id issued
/// before login can't be reused afterwards.
pub async fn log_in(session: &Session, user: &User) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session.insert(SESSION_USER_ID_KEY, user.id).await
}

/// Drop all session state, including the login.
pub async fn log_out(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}

/// The id of the logged-in user, if any.
pub async fn session_user_id(session: &Session) -> Result<Option<i64>, tower_sessions::session::Error> {
    session.get(SESSION_USER_ID_KEY).await
}
