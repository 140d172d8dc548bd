//! Registration page view.

use dioxus::prelude::*;

use api::{MessageResponse, RegisterRequest};
use ui::{use_session, ApiClient, Navbar};

use crate::Route;

/// Register page component. On success it shows a confirmation with a link to
/// the login page rather than logging the new account in.
#[component]
pub fn Register() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut created = use_signal(|| false);
    let mut loading = use_signal(|| false);

    if session.is_authenticated() {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let req = RegisterRequest {
                first_name: first_name().trim().to_string(),
                last_name: last_name().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
            };
            // Invalid forms never reach the network.
            if let Err(msg) = req.validate(&confirm_password()) {
                error.set(Some(msg));
                return;
            }

            loading.set(true);
            let client = ApiClient::new(None);
            match client
                .post::<MessageResponse, _>("/auth/register", &req)
                .await
            {
                Ok(_) => created.set(true),
                Err(e) => {
                    tracing::error!("registration failed: {e}");
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

                h2 { "Create an Account" }

                if let Some(err) = error() {
                    p { class: "form-error", "{err}" }
                }
                if created() {
                    p {
                        class: "form-success",
                        "User created successfully. Click "
                        a { href: "/login", "here" }
                        " to login."
                    }
                }

                div {
                    class: "form-field",
                    input {
                        r#type: "text",
                        placeholder: "First Name",
                        value: first_name(),
                        oninput: move |evt| first_name.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    input {
                        r#type: "text",
                        placeholder: "Last Name",
                        value: last_name(),
                        oninput: move |evt| last_name.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    input {
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    input {
                        r#type: "password",
                        placeholder: "Password (min 8 characters)",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    input {
                        r#type: "password",
                        placeholder: "Confirm Password",
                        value: confirm_password(),
                        oninput: move |evt| confirm_password.set(evt.value()),
                    }
                }

                button {
                    class: "primary wide",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating..." } else { "Create Account" }
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    a { href: "/login", "Login" }
                }
            }
        }
    }
}
