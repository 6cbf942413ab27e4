//! # Web crate — the notes server
//!
//! Wires the `api` crate's JSON endpoints together with the HTML pages, the session
//! layer and request tracing.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`settings`] | Secret key, database URL and listen address from `config.toml` / `NOTIONISH_*` |
//! | [`pages`] | Landing, register, login/logout, dashboard and editor handlers |
//! | [`guard`] | [`guard::PageUser`], the redirecting login guard for pages |
//! | [`views`] | Dioxus components rendered to HTML with `dioxus-ssr` |
//! | [`error`] | [`error::PageError`] |

use api::AppState;
use axum::{routing::get, Router};
use time::Duration;
use tower_http::trace::TraceLayer;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer, SessionStore};

pub mod error;
pub mod guard;
pub mod pages;
pub mod settings;
pub mod views;

use settings::Settings;

/// Build the full application: pages, JSON API and a signed-cookie session layer
/// backed by `store`.
pub fn app<Store>(state: AppState, store: Store, settings: &Settings) -> Router
where
    Store: SessionStore + Clone,
{
    let session_layer = SessionManagerLayer::new(store)
        .with_secure(settings.session.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
        .with_signed(settings.signing_key());

    Router::new()
        .route("/", get(pages::index))
        .route("/register", get(pages::register_form).post(pages::register))
        .route("/login", get(pages::login_form).post(pages::login))
        .route("/logout", get(pages::logout))
        .route("/dashboard", get(pages::dashboard))
        .route("/note/new", get(pages::new_note))
        .route("/note/{id}", get(pages::edit_note))
        .route("/static/main.js", get(pages::main_js))
        .merge(api::notes::router())
        .fallback(pages::not_found)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
