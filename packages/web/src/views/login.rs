//! Login page view with the email/password form.

use dioxus::prelude::*;

use api::{LoginRequest, TokenResponse};
use ui::{use_session, ApiClient, Navbar};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already logged in: auth views are not for you.
    if session.is_authenticated() {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let req = LoginRequest {
                email: email().trim().to_string(),
                password: password(),
            };
            // Invalid forms never reach the network.
            if let Err(msg) = req.validate() {
                error.set(Some(msg));
                return;
            }

            loading.set(true);
            let client = ApiClient::new(None);
            match client.post::<TokenResponse, _>("/auth/login", &req).await {
                Ok(resp) => {
                    session.login(resp.token);
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::error!("login failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        Navbar {}
        main {
            class: "auth-page",
            form {
                class: "auth-card",
                onsubmit: handle_submit,

                h2 { "Log In to Your Account" }

                if let Some(err) = error() {
                    p { class: "form-error", "{err}" }
                }

                div {
                    class: "form-field",
                    input {
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    input {
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                button {
                    class: "primary wide",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Logging in..." } else { "Log In" }
                }

                p {
                    class: "auth-switch",
                    "Don't have an account? "
                    a { href: "/register", "Register" }
                }
            }
        }
    }
}
