use dioxus::prelude::*;

use ui::Navbar;

/// Catch-all for unknown routes.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Navbar {}
        main {
            class: "hero",
            h2 { "Page not found" }
            p { "There is nothing at /{path}." }
            a { class: "button primary", href: "/", "Back home" }
        }
    }
}
