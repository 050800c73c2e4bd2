#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use crate::net::types::Task;

/// Task list state for the main view.
///
/// The list is kept newest-first. Mutations mirror the server's responses:
/// creations prepend, updates replace in place, deletions remove.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TasksState {
    pub tasks: Vec<Task>,
    pub loading: bool,
}

impl TasksState {
    /// Replace the whole list with a fresh fetch, newest first.
    /// ISO-8601 timestamps sort lexicographically, so a string sort is
    /// enough here.
    pub fn set_loaded(&mut self, mut tasks: Vec<Task>) {
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        self.tasks = tasks;
        self.loading = false;
    }

    /// Prepend a newly created task.
    pub fn insert_new(&mut self, task: Task) {
        self.tasks.insert(0, task);
    }

    /// Replace a task by id; unknown ids are ignored.
    pub fn replace(&mut self, task: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = task;
        }
    }

    /// Remove a task by id.
    pub fn remove(&mut self, id: &str) {
        self.tasks.retain(|t| t.id != id);
    }
}
