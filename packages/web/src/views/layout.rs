//! Page shell shared by every view: document head, navigation bar and flash messages.

use api::auth::Flash;
use api::UserInfo;
use dioxus::prelude::*;

const PAGE_CSS: &str = r#"
body { margin: 0; background: #ffffff; color: #37352f; font-family: -apple-system, BlinkMacSystemFont, Segoe UI, Helvetica, Arial, sans-serif; }
nav { display: flex; gap: 1rem; align-items: center; padding: 0.75rem 1.5rem; border-bottom: 1px solid #e9e9e7; }
nav .brand { font-weight: 700; margin-right: auto; color: inherit; text-decoration: none; }
main { max-width: 720px; margin: 2rem auto; padding: 0 1.5rem; }
form.stacked { display: flex; flex-direction: column; gap: 0.75rem; max-width: 320px; }
.flash { padding: 0.625rem; border-radius: 4px; margin-bottom: 1rem; font-size: 0.875rem; }
.flash-success { background: #edf7ed; border: 1px solid #b7dfb9; }
.flash-danger { background: #fdecea; border: 1px solid #f5c2c0; color: #b42318; }
.flash-info, .flash-message { background: #eef4fb; border: 1px solid #c3d7ef; }
.note-list { list-style: none; padding: 0; }
.note-list li { display: flex; justify-content: space-between; padding: 0.5rem 0; border-bottom: 1px solid #f1f1ef; }
.note-list .meta { color: #787774; font-size: 0.8125rem; }
#note-title { width: 100%; font-size: 1.5rem; border: none; outline: none; margin-bottom: 1rem; }
#note-content { width: 100%; min-height: 320px; font: inherit; }
.actions { display: flex; gap: 0.75rem; margin-top: 1rem; align-items: center; }
"#;

#[component]
pub fn Layout(
    title: String,
    flashes: Vec<Flash>,
    user: Option<UserInfo>,
    children: Element,
) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{title} · Notionish" }
            style { {PAGE_CSS} }
        }
        body {
            nav {
                a { class: "brand", href: "/", "Notionish" }
                if let Some(username) = user.map(|u| u.username) {
                    span { "{username}" }
                    a { href: "/dashboard", "Dashboard" }
                    a { href: "/logout", "Log out" }
                } else {
                    a { href: "/login", "Log in" }
                    a { href: "/register", "Register" }
                }
            }
            main {
                for flash in flashes {
                    FlashMessage { flash: flash }
                }
                {children}
            }
        }
    }
}

#[component]
fn FlashMessage(flash: Flash) -> Element {
    let class = format!("flash flash-{}", flash.category);
    let message = flash.message;
    rsx! {
        div { class: "{class}", "{message}" }
    }
}
