use dioxus::prelude::*;

use super::Layout;

#[component]
pub fn NotFound() -> Element {
    rsx! {
        Layout {
            title: "Not Found".to_string(),
            flashes: Vec::new(),
            user: None,
            h1 { "Not Found" }
            p {
                "The page you asked for does not exist. "
                a { href: "/", "Back home" }
            }
        }
    }
}
