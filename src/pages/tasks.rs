//! Task list page: the main authenticated view.
//!
//! Loads the user's tasks on mount and keeps the shared list state in sync
//! with every server response. All mutations are optimistic about nothing:
//! the list only changes after the server confirms.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::notice::Notice;
use crate::components::task_card::TaskCard;
use crate::components::task_delete_dialog::TaskDeleteDialog;
use crate::components::task_edit_dialog::{TaskEditDialog, TaskEditResult};
use crate::net::http::ApiClient;
use crate::net::types::Task;
use crate::session::guard::{self, GuardDecision};
use crate::session::state::Session;
use crate::state::tasks::TasksState;

/// Task list page. Protected; guests are sent to login.
///
/// The protected guard is reactive: when the session dies (logout button
/// or a 401 handled by the API client), the effect re-runs and kicks the
/// user back to the login view.
#[component]
pub fn TasksPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let client = expect_context::<ApiClient>();
    let tasks = expect_context::<RwSignal<TasksState>>();
    let navigate = use_navigate();

    {
        let session = session.clone();
        let navigate = navigate.clone();
        Effect::new(move || {
            if let GuardDecision::Redirect(target) = guard::check_protected(&session) {
                navigate(target, NavigateOptions::default());
            }
        });
    }

    let notice = RwSignal::new(None::<String>);
    let title_input = RwSignal::new(String::new());
    let description_input = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);
    let editing = RwSignal::new(None::<Task>);
    let deleting = RwSignal::new(None::<Task>);

    // Initial load. Reads nothing reactive, so it runs once on mount.
    {
        let client = client.clone();
        Effect::new(move || {
            #[cfg(feature = "hydrate")]
            {
                let client = client.clone();
                tasks.update(|t| t.loading = true);
                leptos::task::spawn_local(async move {
                    match crate::net::tasks::fetch_tasks(&client).await {
                        Ok(list) => tasks.update(|t| t.set_loaded(list)),
                        Err(err) => {
                            leptos::logging::warn!("failed to load tasks: {err}");
                            tasks.update(|t| t.loading = false);
                            notice.set(Some("Failed to load tasks".to_owned()));
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &client;
            }
        });
    }

    let on_add = {
        let client = client.clone();
        Callback::new(move |_: ()| {
            let title = title_input.get().trim().to_owned();
            if title.is_empty() {
                form_error.set(Some("Title is required".to_owned()));
                return;
            }
            if title.len() > 100 {
                form_error.set(Some("Title must be 100 characters or fewer".to_owned()));
                return;
            }
            let description = description_input.get().trim().to_owned();
            if description.len() > 500 {
                form_error.set(Some("Description must be 500 characters or fewer".to_owned()));
                return;
            }
            form_error.set(None);

            #[cfg(feature = "hydrate")]
            {
                let client = client.clone();
                leptos::task::spawn_local(async move {
                    let request = crate::net::types::CreateTaskRequest { title, description };
                    match crate::net::tasks::create_task(&client, &request).await {
                        Ok(task) => {
                            tasks.update(|t| t.insert_new(task));
                            title_input.set(String::new());
                            description_input.set(String::new());
                            notice.set(Some("Task created".to_owned()));
                        }
                        Err(_) => notice.set(Some("Failed to create task".to_owned())),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&client, title, description);
            }
        })
    };

    let on_toggle = {
        let client = client.clone();
        Callback::new(move |task: Task| {
            #[cfg(feature = "hydrate")]
            {
                let client = client.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::tasks::set_completed(&client, &task.id, !task.completed)
                        .await
                    {
                        Ok(updated) => tasks.update(|t| t.replace(updated)),
                        Err(_) => notice.set(Some("Failed to update task".to_owned())),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&client, task);
            }
        })
    };

    let on_edit = Callback::new(move |task: Task| editing.set(Some(task)));
    let on_delete = Callback::new(move |task: Task| deleting.set(Some(task)));
    let on_cancel_edit = Callback::new(move |_: ()| editing.set(None));
    let on_cancel_delete = Callback::new(move |_: ()| deleting.set(None));

    let on_save_edit = {
        let client = client.clone();
        Callback::new(move |result: TaskEditResult| {
            let Some(task) = editing.get() else {
                return;
            };
            editing.set(None);

            #[cfg(feature = "hydrate")]
            {
                let client = client.clone();
                leptos::task::spawn_local(async move {
                    let request = crate::net::types::UpdateTaskRequest {
                        title: Some(result.title),
                        description: Some(result.description),
                        completed: None,
                    };
                    match crate::net::tasks::update_task(&client, &task.id, &request).await {
                        Ok(updated) => {
                            tasks.update(|t| t.replace(updated));
                            notice.set(Some("Task updated".to_owned()));
                        }
                        Err(_) => notice.set(Some("Failed to update task".to_owned())),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&client, result, task);
            }
        })
    };

    let on_confirm_delete = {
        let client = client.clone();
        Callback::new(move |_: ()| {
            let Some(task) = deleting.get() else {
                return;
            };
            deleting.set(None);

            #[cfg(feature = "hydrate")]
            {
                let client = client.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::tasks::delete_task(&client, &task.id).await {
                        Ok(()) => {
                            tasks.update(|t| t.remove(&task.id));
                            notice.set(Some("Task deleted".to_owned()));
                        }
                        Err(_) => notice.set(Some("Failed to delete task".to_owned())),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&client, task);
            }
        })
    };

    // Logout only clears the session; the protected guard effect above
    // handles the redirect.
    let on_logout = {
        let session = session.clone();
        move |_| session.logout()
    };

    let user_email = {
        let session = session.clone();
        move || {
            session
                .state()
                .get()
                .user
                .map(|u| u.email)
                .unwrap_or_default()
        }
    };

    view! {
        <div class="tasks-page">
            <header class="tasks-page__header">
                <h1>"My Tasks"</h1>
                <div class="tasks-page__session">
                    <span class="tasks-page__email">{user_email}</span>
                    <button class="btn btn--danger" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </header>

            <Notice message=notice/>

            <form
                class="tasks-page__add"
                on:submit=move |ev| {
                    ev.prevent_default();
                    on_add.run(());
                }
            >
                <input
                    class="tasks-page__title-input"
                    type="text"
                    placeholder="What needs to be done?"
                    prop:value=move || title_input.get()
                    on:input=move |ev| title_input.set(event_target_value(&ev))
                />
                <input
                    class="tasks-page__desc-input"
                    type="text"
                    placeholder="Add details... (optional)"
                    prop:value=move || description_input.get()
                    on:input=move |ev| description_input.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "Add"
                </button>
            </form>

            <Show when=move || form_error.get().is_some()>
                <div class="tasks-page__form-error">
                    {move || form_error.get().unwrap_or_default()}
                </div>
            </Show>

            <div class="tasks-page__list">
                {move || {
                    let state = tasks.get();
                    if state.loading {
                        return view! { <p class="tasks-page__loading">"Loading tasks..."</p> }
                            .into_any();
                    }
                    if state.tasks.is_empty() {
                        return view! {
                            <div class="tasks-page__empty">
                                <p>"No tasks yet. Add your first task above!"</p>
                            </div>
                        }
                            .into_any();
                    }
                    state
                        .tasks
                        .into_iter()
                        .map(|task| {
                            view! {
                                <TaskCard
                                    task=task
                                    on_toggle=on_toggle
                                    on_edit=on_edit
                                    on_delete=on_delete
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <Show when=move || editing.get().is_some()>
                {move || {
                    editing
                        .get()
                        .map(|task| {
                            view! {
                                <TaskEditDialog
                                    initial_title=task.title
                                    initial_description=task.description
                                    on_save=on_save_edit
                                    on_cancel=on_cancel_edit
                                />
                            }
                        })
                }}
            </Show>

            <Show when=move || deleting.get().is_some()>
                {move || {
                    deleting
                        .get()
                        .map(|task| {
                            view! {
                                <TaskDeleteDialog
                                    title=task.title
                                    on_confirm=on_confirm_delete
                                    on_cancel=on_cancel_delete
                                />
                            }
                        })
                }}
            </Show>
        </div>
    }
}
