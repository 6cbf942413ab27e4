//! Login page view with a username/password form.

use api::auth::Flash;
use dioxus::prelude::*;

use super::Layout;

/// Login page component. Posts back to `/login`.
#[component]
pub fn Login(flashes: Vec<Flash>) -> Element {
    rsx! {
        Layout {
            title: "Log in".to_string(),
            flashes: flashes,
            user: None,
            h1 { "Log in" }
            form {
                class: "stacked",
                method: "post",
                action: "/login",
                input { r#type: "text", name: "username", placeholder: "Username", autocomplete: "username" }
                input { r#type: "password", name: "password", placeholder: "Password", autocomplete: "current-password" }
                button { r#type: "submit", "Log in" }
            }
            p {
                "No account yet? "
                a { href: "/register", "Register" }
            }
        }
    }
}
