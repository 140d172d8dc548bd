use dioxus::prelude::*;

use crate::{redirect, use_session};

/// Top navigation bar. Link set depends on whether a token is present.
#[component]
pub fn Navbar() -> Element {
    let mut session = use_session();

    let handle_logout = move |_| {
        session.logout();
        redirect("/login");
    };

    rsx! {
        nav {
            class: "navbar",
            a { class: "navbar-brand", href: "/", "TaskNet" }
            div {
                class: "navbar-links",
                a { href: "/", "Home" }
                if session.is_authenticated() {
                    a { href: "/dashboard", "Dashboard" }
                    button {
                        class: "navbar-logout",
                        onclick: handle_logout,
                        "Logout"
                    }
                } else {
                    a { href: "/login", "Login" }
                    a { class: "navbar-register", href: "/register", "Register" }
                }
            }
        }
    }
}
