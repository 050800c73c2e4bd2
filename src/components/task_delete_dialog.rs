//! Confirmation dialog shown before deleting a task.

use leptos::prelude::*;

/// Delete confirmation naming the task about to be removed.
#[component]
pub fn TaskDeleteDialog(
    title: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Task"</h2>
                <p>{format!("Delete \"{title}\"? This cannot be undone.")}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
