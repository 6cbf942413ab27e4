//! Server-rendered index page. The list itself is filled in by `/static/app.js`.

use dioxus::prelude::*;

/// Render the index page to a complete HTML document.
pub fn index_page() -> String {
    let body = dioxus_ssr::render_element(rsx! {
        Index {}
    });
    format!("<!DOCTYPE html><html lang=\"en\">{body}</html>")
}

#[component]
fn Index() -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            title { "Message Board" }
            style {
                r#"
                body {{ font-family: -apple-system, Segoe UI, Helvetica, Arial, sans-serif; max-width: 640px; margin: 2rem auto; color: #37352f; }}
                form {{ display: flex; flex-direction: column; gap: 0.5rem; margin-bottom: 2rem; }}
                .msg {{ border-bottom: 1px solid #e9e9e7; padding: 0.75rem 0; }}
                .meta {{ color: #787774; font-size: 0.875rem; }}
                "#
            }
        }
        body {
            h1 { "Message Board" }
            form {
                id: "msgForm",
                input { id: "name", name: "name", placeholder: "Your name", required: true }
                textarea { id: "body", name: "body", placeholder: "Say something", required: true }
                button { r#type: "submit", "Post" }
            }
            div { id: "messages" }
            script { src: "/static/app.js" }
        }
    }
}
