//! Dashboard view: the task list with its filter/search/sort controls and the
//! add/edit dialog.
//!
//! The list is fetched once on mount and refined purely client-side via
//! [`api::TaskQuery`]. Mutations follow two patterns: add and mark-complete
//! re-fetch the whole list; edit and delete patch local state, but only after
//! the server has confirmed, so a failed call never leaves the view showing
//! state the server does not have.

use dioxus::prelude::*;

use api::{SortKey, SortOrder, StatusFilter, TaskInfo, TaskListResponse, TaskPayload, TaskQuery};
use ui::{use_session, ApiClient, ClientError, Navbar, Session, TaskDialog};

use crate::Route;

/// Which form the add/edit dialog is showing, if any.
#[derive(Debug, Clone, PartialEq)]
enum DialogState {
    Closed,
    Add,
    Edit(TaskInfo),
}

async fn fetch_tasks(session: Session) -> Result<Vec<TaskInfo>, ClientError> {
    ApiClient::for_session(&session)
        .get::<TaskListResponse>("/tasks")
        .await
        .map(|resp| resp.tasks)
}

#[component]
pub fn Dashboard() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut tasks = use_signal(Vec::<TaskInfo>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut dialog = use_signal(|| DialogState::Closed);
    let mut status = use_signal(StatusFilter::default);
    let mut search = use_signal(String::new);
    let mut sort_key = use_signal(SortKey::default);
    let mut order = use_signal(SortOrder::default);

    // Load the task list on mount.
    let _loader = use_resource(move || async move {
        if session.token().is_none() {
            return;
        }
        match fetch_tasks(session).await {
            Ok(list) => tasks.set(list),
            Err(e) => {
                tracing::error!("failed to fetch tasks: {e}");
                error.set(Some(e.to_string()));
            }
        }
    });

    // Route guard: this view is for authenticated users only.
    if !session.is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let handle_save = move |(title, description): (String, String)| {
        spawn(async move {
            error.set(None);
            let client = ApiClient::for_session(&session);
            let payload = TaskPayload { title, description };

            match dialog() {
                DialogState::Add => {
                    match client.post::<TaskInfo, _>("/task/add-task", &payload).await {
                        Ok(_) => {
                            // Full resync after add.
                            match fetch_tasks(session).await {
                                Ok(list) => tasks.set(list),
                                Err(e) => error.set(Some(e.to_string())),
                            }
                            dialog.set(DialogState::Closed);
                        }
                        Err(e) => error.set(Some(e.to_string())),
                    }
                }
                DialogState::Edit(task) => {
                    let path = format!("/task/update-task/{}", task.id);
                    match client.put::<TaskInfo, _>(&path, &payload).await {
                        Ok(updated) => {
                            // Patch the one task, now that the server agrees.
                            tasks.with_mut(|list| {
                                if let Some(t) = list.iter_mut().find(|t| t.id == updated.id) {
                                    t.title = updated.title.clone();
                                    t.description = updated.description.clone();
                                }
                            });
                            dialog.set(DialogState::Closed);
                        }
                        Err(e) => error.set(Some(e.to_string())),
                    }
                }
                DialogState::Closed => {}
            }
        });
    };

    let mut handle_complete = move |id: String| {
        spawn(async move {
            error.set(None);
            let client = ApiClient::for_session(&session);
            let path = format!("/task/update-task/{id}");
            match client.put_empty::<TaskInfo>(&path).await {
                Ok(_) => match fetch_tasks(session).await {
                    Ok(list) => tasks.set(list),
                    Err(e) => error.set(Some(e.to_string())),
                },
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let mut handle_delete = move |id: String| {
        spawn(async move {
            error.set(None);
            let client = ApiClient::for_session(&session);
            let path = format!("/task/delete-task/{id}");
            match client.delete::<api::MessageResponse>(&path).await {
                Ok(_) => {
                    // Remove locally only once the server confirmed.
                    tasks.with_mut(|list| list.retain(|t| t.id != id));
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let handle_logout = move |_| {
        session.logout();
        nav.push(Route::Login {});
    };

    let query = TaskQuery {
        status: status(),
        search: search(),
        sort_key: sort_key(),
        order: order(),
    };
    let visible = query.apply(&tasks());
    let completed_count = tasks().iter().filter(|t| t.completed).count();

    rsx! {
        Navbar {}
        main {
            class: "dashboard",

            header {
                class: "dashboard-header",
                h2 { "Your Tasks" }
                span { class: "completed-count", "({completed_count} completed)" }
                div {
                    class: "dashboard-actions",
                    button {
                        class: "primary",
                        onclick: move |_| dialog.set(DialogState::Add),
                        "New Task"
                    }
                    button {
                        class: "secondary",
                        onclick: handle_logout,
                        "Logout"
                    }
                }
            }

            if let Some(err) = error() {
                p { class: "form-error", "{err}" }
            }

            div {
                class: "task-controls",
                input {
                    class: "task-search",
                    r#type: "search",
                    placeholder: "Search tasks...",
                    value: search(),
                    oninput: move |evt| search.set(evt.value()),
                }
                select {
                    value: status().as_str(),
                    onchange: move |evt| status.set(StatusFilter::parse(&evt.value())),
                    option { value: "all", "All" }
                    option { value: "ongoing", "Ongoing" }
                    option { value: "completed", "Completed" }
                }
                select {
                    value: sort_key().as_str(),
                    onchange: move |evt| sort_key.set(SortKey::parse(&evt.value())),
                    option { value: "created", "Created" }
                    option { value: "deadline", "Deadline" }
                    option { value: "priority", "Priority" }
                }
                button {
                    class: "secondary",
                    onclick: move |_| order.set(order().toggled()),
                    if order() == SortOrder::Ascending { "Ascending" } else { "Descending" }
                }
            }

            {match dialog() {
                DialogState::Add => rsx! {
                    TaskDialog {
                        heading: "New Task",
                        initial_title: "",
                        initial_description: "",
                        on_save: handle_save,
                        on_cancel: move |_| dialog.set(DialogState::Closed),
                    }
                },
                DialogState::Edit(task) => rsx! {
                    TaskDialog {
                        heading: "Edit Task",
                        initial_title: task.title.clone(),
                        initial_description: task.description.clone(),
                        on_save: handle_save,
                        on_cancel: move |_| dialog.set(DialogState::Closed),
                    }
                },
                DialogState::Closed => rsx! {},
            }}

            if visible.is_empty() {
                p { class: "task-empty", "No tasks to show" }
            }

            ul {
                class: "task-list",
                for task in visible {
                    li {
                        key: "{task.id}",
                        class: if task.completed { "task-card completed" } else { "task-card" },

                        div {
                            class: "task-body",
                            h3 { "{task.title}" }
                            if !task.description.is_empty() {
                                p { "{task.description}" }
                            }
                            TaskMeta { task: task.clone() }
                        }

                        div {
                            class: "task-buttons",
                            if !task.completed {
                                button {
                                    class: "primary",
                                    onclick: {
                                        let id = task.id.clone();
                                        move |_| handle_complete(id.clone())
                                    },
                                    "Complete"
                                }
                            }
                            button {
                                class: "secondary",
                                onclick: {
                                    let task = task.clone();
                                    move |_| dialog.set(DialogState::Edit(task.clone()))
                                },
                                "Edit"
                            }
                            button {
                                class: "danger",
                                onclick: {
                                    let id = task.id.clone();
                                    move |_| handle_delete(id.clone())
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Creation date plus the optional deadline and priority.
#[component]
fn TaskMeta(task: TaskInfo) -> Element {
    let created = task.created_at.format("%Y-%m-%d").to_string();
    let deadline = task
        .deadline
        .map(|d| d.format("%Y-%m-%d").to_string());

    rsx! {
        p {
            class: "task-meta",
            span { "Created {created}" }
            if let Some(deadline) = deadline {
                span { " · Due {deadline}" }
            }
            if let Some(priority) = task.priority {
                span { " · Priority {priority}" }
            }
        }
    }
}
