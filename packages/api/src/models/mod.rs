//! Data models for the application.

mod note;
mod user;

pub use note::{Note, NoteDraft, NoteSummary, DEFAULT_TITLE, MAX_TITLE_CHARS};
pub use user::{User, UserInfo};
