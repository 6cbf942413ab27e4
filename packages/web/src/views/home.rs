use api::auth::Flash;
use api::UserInfo;
use dioxus::prelude::*;

use super::Layout;

/// Landing page.
#[component]
pub fn Home(flashes: Vec<Flash>, user: Option<UserInfo>) -> Element {
    let logged_in = user.is_some();

    rsx! {
        Layout {
            title: "Home".to_string(),
            flashes: flashes,
            user: user,
            h1 { "Notionish" }
            p { "A small place for your notes." }
            if logged_in {
                p { a { href: "/dashboard", "Go to your notes" } }
            } else {
                p {
                    a { href: "/login", "Log in" }
                    " or "
                    a { href: "/register", "create an account" }
                    " to get started."
                }
            }
        }
    }
}
