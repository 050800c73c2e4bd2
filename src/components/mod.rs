//! Reusable view components for the task list.

pub mod notice;
pub mod task_card;
pub mod task_delete_dialog;
pub mod task_edit_dialog;
