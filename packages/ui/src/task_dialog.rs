use dioxus::prelude::*;

/// Inline form for creating or editing a task.
///
/// The dashboard opens it in one of two modes: empty fields for a new task,
/// or pre-populated from the task being edited. Either way the dialog only
/// reports `(title, description)` back through `on_save`; the dashboard owns
/// the actual API call.
#[component]
pub fn TaskDialog(
    heading: String,
    initial_title: String,
    initial_description: String,
    on_save: EventHandler<(String, String)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut title = use_signal(move || initial_title.clone());
    let mut description = use_signal(move || initial_description.clone());
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |_| {
        let t = title().trim().to_string();
        if t.is_empty() {
            error.set(Some("Title is required".to_string()));
            return;
        }
        on_save.call((t, description()));
    };

    rsx! {
        div {
            class: "task-dialog",
            h2 { "{heading}" }

            if let Some(err) = error() {
                p { class: "form-error", "{err}" }
            }

            div {
                class: "form-field",
                label { r#for: "task-title", "Title" }
                input {
                    id: "task-title",
                    r#type: "text",
                    placeholder: "What needs doing?",
                    value: title(),
                    oninput: move |evt| title.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { r#for: "task-description", "Description" }
                textarea {
                    id: "task-description",
                    placeholder: "Details (optional)",
                    value: description(),
                    oninput: move |evt| description.set(evt.value()),
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "primary",
                    onclick: handle_submit,
                    "Save"
                }
                button {
                    class: "secondary",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
