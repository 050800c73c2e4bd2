//! One row in the task list: completion checkbox, title, description,
//! created date, and edit/delete actions.

use leptos::prelude::*;

use crate::net::types::Task;
use crate::util::date;

/// A single task card. Completed tasks are struck through via the
/// `--completed` modifier class.
#[component]
pub fn TaskCard(
    task: Task,
    on_toggle: Callback<Task>,
    on_edit: Callback<Task>,
    on_delete: Callback<Task>,
) -> impl IntoView {
    let completed = task.completed;
    let title = task.title.clone();
    let description = task.description.clone();
    let has_description = !description.is_empty();
    let created = date::format_timestamp(&task.created_at);

    let toggle_task = task.clone();
    let edit_task = task.clone();
    let delete_task = task;

    let card_class = if completed {
        "task-card task-card--completed"
    } else {
        "task-card"
    };

    view! {
        <div class=card_class>
            <input
                class="task-card__checkbox"
                type="checkbox"
                prop:checked=completed
                on:change=move |_| on_toggle.run(toggle_task.clone())
            />

            <div class="task-card__details">
                <h3 class="task-card__title">{title}</h3>
                <Show when=move || has_description>
                    <p class="task-card__description">{description.clone()}</p>
                </Show>
                <span class="task-card__date">{format!("Created: {created}")}</span>
            </div>

            <div class="task-card__actions">
                <button
                    class="btn btn--icon"
                    title="Edit task"
                    on:click=move |_| on_edit.run(edit_task.clone())
                >
                    "Edit"
                </button>
                <button
                    class="btn btn--icon btn--danger"
                    title="Delete task"
                    on:click=move |_| on_delete.run(delete_task.clone())
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
