use dioxus::prelude::*;

use ui::{use_session, Navbar};

/// Landing page.
#[component]
pub fn Home() -> Element {
    let session = use_session();

    rsx! {
        Navbar {}
        main {
            class: "hero",
            h2 { "Organize your day with TaskNet" }
            p { "A simple place for your tasks: add them, work through them, tick them off." }
            div {
                class: "hero-actions",
                if session.is_authenticated() {
                    a { class: "button primary", href: "/dashboard", "Go to your dashboard" }
                } else {
                    a { class: "button primary", href: "/register", "Get started" }
                    a { class: "button secondary", href: "/login", "Log in" }
                }
            }
        }
    }
}
