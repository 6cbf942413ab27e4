use api::auth::Flash;
use api::{NoteSummary, UserInfo};
use dioxus::prelude::*;

use super::Layout;

/// Dashboard: the user's notes, most recently updated first.
#[component]
pub fn Notes(flashes: Vec<Flash>, user: UserInfo, notes: Vec<NoteSummary>) -> Element {
    let is_empty = notes.is_empty();

    rsx! {
        Layout {
            title: "Dashboard".to_string(),
            flashes: flashes,
            user: Some(user),
            div {
                class: "actions",
                h1 { "Your notes" }
                a { href: "/note/new", "New note" }
            }
            if is_empty {
                p { "No notes yet." }
            }
            ul {
                class: "note-list",
                for note in notes {
                    NoteRow { note: note }
                }
            }
        }
    }
}

#[component]
fn NoteRow(note: NoteSummary) -> Element {
    let href = format!("/note/{}", note.id);
    let title = note.title;
    let updated = note.updated_at.format("%Y-%m-%d %H:%M").to_string();

    rsx! {
        li {
            a { href: "{href}", "{title}" }
            span { class: "meta", "{updated}" }
        }
    }
}
