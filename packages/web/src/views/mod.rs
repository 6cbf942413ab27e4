//! Server-rendered pages.
//!
//! Each page is a Dioxus component rendered once to a string with `dioxus-ssr`;
//! nothing here runs in the browser. The editor's behaviour lives in
//! `assets/main.js`, which talks to the JSON API.

use api::auth::Flash;
use api::{Note, NoteSummary, UserInfo};
use dioxus::prelude::*;

mod layout;
pub use layout::Layout;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod notes;
pub use notes::Notes;

mod note_detail;
pub use note_detail::NoteDetail;

mod not_found;
pub use not_found::NotFound;

fn render(element: Element) -> String {
    let body = dioxus_ssr::render_element(element);
    format!("<!DOCTYPE html><html lang=\"en\">{body}</html>")
}

pub fn home_page(flashes: Vec<Flash>, user: Option<UserInfo>) -> String {
    render(rsx! { Home { flashes: flashes, user: user } })
}

pub fn login_page(flashes: Vec<Flash>) -> String {
    render(rsx! { Login { flashes: flashes } })
}

pub fn register_page(flashes: Vec<Flash>) -> String {
    render(rsx! { Register { flashes: flashes } })
}

pub fn notes_page(flashes: Vec<Flash>, user: UserInfo, notes: Vec<NoteSummary>) -> String {
    render(rsx! { Notes { flashes: flashes, user: user, notes: notes } })
}

pub fn note_page(flashes: Vec<Flash>, user: UserInfo, note: Option<Note>) -> String {
    render(rsx! { NoteDetail { flashes: flashes, user: user, note: note } })
}

pub fn not_found_page() -> String {
    render(rsx! { NotFound {} })
}
