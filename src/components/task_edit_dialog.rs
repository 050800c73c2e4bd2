//! Modal dialog for editing a task's title and description.

use leptos::prelude::*;

/// Values returned when the edit dialog is saved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskEditResult {
    pub title: String,
    pub description: String,
}

/// Edit dialog prefilled from the task being edited. Backdrop click and
/// Cancel dismiss it; Save validates the title before handing the result
/// back to the caller.
#[component]
pub fn TaskEditDialog(
    initial_title: String,
    initial_description: String,
    on_save: Callback<TaskEditResult>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = RwSignal::new(initial_title);
    let description = RwSignal::new(initial_description);
    let error = RwSignal::new(None::<String>);

    let submit = Callback::new(move |_: ()| {
        let new_title = title.get().trim().to_owned();
        if new_title.is_empty() {
            error.set(Some("Title is required".to_owned()));
            return;
        }
        if new_title.len() > 100 {
            error.set(Some("Title must be 100 characters or fewer".to_owned()));
            return;
        }
        let new_description = description.get().trim().to_owned();
        if new_description.len() > 500 {
            error.set(Some("Description must be 500 characters or fewer".to_owned()));
            return;
        }
        on_save.run(TaskEditResult {
            title: new_title,
            description: new_description,
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit Task"</h2>

                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>

                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <Show when=move || error.get().is_some()>
                    <div class="dialog__error">{move || error.get().unwrap_or_default()}</div>
                </Show>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
