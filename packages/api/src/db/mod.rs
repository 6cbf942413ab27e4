//! # Database module — SQLite connection pool and schema
//!
//! The notes service keeps users and notes in a single SQLite file. The pool is
//! created once at startup by the binary and handed to every handler through
//! [`crate::AppState`]; nothing here is a process-wide singleton.
//!
//! ## Re-exports
//!
//! - [`connect`] — open a pool for a `sqlite://` URL, creating the file on first run.
//! - [`init_database`] — `CREATE TABLE IF NOT EXISTS` for `users` and `notes`.
//! - [`memory`] — an in-memory pool with the schema applied, used by tests.

mod pool;

pub use pool::{connect, init_database, memory};
