use super::*;

fn task(id: &str, created_at: &str) -> Task {
    Task {
        id: id.to_owned(),
        title: format!("task {id}"),
        description: String::new(),
        completed: false,
        user_id: "u1".to_owned(),
        created_at: created_at.to_owned(),
        updated_at: created_at.to_owned(),
    }
}

#[test]
fn default_state_is_empty_and_not_loading() {
    let state = TasksState::default();
    assert!(state.tasks.is_empty());
    assert!(!state.loading);
}

#[test]
fn set_loaded_sorts_newest_first() {
    let mut state = TasksState {
        loading: true,
        ..TasksState::default()
    };
    state.set_loaded(vec![
        task("t1", "2026-08-01T09:00:00.000Z"),
        task("t3", "2026-08-03T09:00:00.000Z"),
        task("t2", "2026-08-02T09:00:00.000Z"),
    ]);

    let ids: Vec<_> = state.tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["t3", "t2", "t1"]);
    assert!(!state.loading);
}

#[test]
fn insert_new_prepends() {
    let mut state = TasksState::default();
    state.set_loaded(vec![task("t1", "2026-08-01T09:00:00.000Z")]);
    state.insert_new(task("t2", "2026-08-02T09:00:00.000Z"));

    assert_eq!(state.tasks[0].id, "t2");
    assert_eq!(state.tasks.len(), 2);
}

#[test]
fn replace_swaps_matching_task_in_place() {
    let mut state = TasksState::default();
    state.set_loaded(vec![
        task("t1", "2026-08-01T09:00:00.000Z"),
        task("t2", "2026-08-02T09:00:00.000Z"),
    ]);

    let mut updated = task("t1", "2026-08-01T09:00:00.000Z");
    updated.completed = true;
    state.replace(updated);

    assert!(state.tasks[1].completed);
    assert_eq!(state.tasks.len(), 2);
}

#[test]
fn replace_unknown_id_is_a_no_op() {
    let mut state = TasksState::default();
    state.set_loaded(vec![task("t1", "2026-08-01T09:00:00.000Z")]);
    state.replace(task("t404", "2026-08-09T09:00:00.000Z"));

    assert_eq!(state.tasks.len(), 1);
    assert_eq!(state.tasks[0].id, "t1");
}

#[test]
fn remove_drops_matching_task() {
    let mut state = TasksState::default();
    state.set_loaded(vec![
        task("t1", "2026-08-01T09:00:00.000Z"),
        task("t2", "2026-08-02T09:00:00.000Z"),
    ]);
    state.remove("t2");

    assert_eq!(state.tasks.len(), 1);
    assert_eq!(state.tasks[0].id, "t1");
}
