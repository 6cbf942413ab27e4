//! Note editor. The same view serves `/note/new` (no note) and `/note/{id}`.

use api::auth::Flash;
use api::{Note, UserInfo};
use dioxus::prelude::*;

use super::Layout;

#[component]
pub fn NoteDetail(flashes: Vec<Flash>, user: UserInfo, note: Option<Note>) -> Element {
    let existing = note.is_some();
    // main.js reads the id to choose between POST and PUT
    let (note_id, title, content) = match note {
        Some(note) => (note.id.to_string(), note.title, note.content),
        None => (String::new(), String::new(), String::new()),
    };
    let page_title = if existing { title.clone() } else { "New note".to_string() };

    rsx! {
        Layout {
            title: page_title,
            flashes: flashes,
            user: Some(user),
            div {
                id: "editor",
                "data-note-id": "{note_id}",
                input {
                    id: "note-title",
                    r#type: "text",
                    placeholder: "Untitled",
                    value: "{title}",
                }
                textarea { id: "note-content", placeholder: "Start writing...", "{content}" }
                div {
                    class: "actions",
                    button { id: "save-btn", r#type: "button", "Save" }
                    if existing {
                        button { id: "delete-btn", r#type: "button", "Delete" }
                    }
                    a { href: "/dashboard", "Back to notes" }
                }
            }
            script { src: "/static/main.js" }
        }
    }
}
