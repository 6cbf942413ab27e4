//! Registration page view.

use api::auth::Flash;
use dioxus::prelude::*;

use super::Layout;

/// Register page component. Posts back to `/register`.
#[component]
pub fn Register(flashes: Vec<Flash>) -> Element {
    rsx! {
        Layout {
            title: "Register".to_string(),
            flashes: flashes,
            user: None,
            h1 { "Create account" }
            form {
                class: "stacked",
                method: "post",
                action: "/register",
                input { r#type: "text", name: "username", placeholder: "Username", autocomplete: "username" }
                input { r#type: "password", name: "password", placeholder: "Password", autocomplete: "new-password" }
                button { r#type: "submit", "Sign up" }
            }
            p {
                "Already have an account? "
                a { href: "/login", "Log in" }
            }
        }
    }
}
