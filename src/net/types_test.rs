use super::*;

#[test]
fn user_deserializes_camel_case_created_at() {
    let user: User = serde_json::from_str(
        r#"{"id":"u1","email":"a@b.com","createdAt":"2026-08-01T09:30:00.000Z"}"#,
    )
    .expect("user");
    assert_eq!(user.id, "u1");
    assert_eq!(user.created_at, "2026-08-01T09:30:00.000Z");
}

#[test]
fn login_request_omits_create_when_unset() {
    let body = serde_json::to_value(LoginRequest::new("a@b.com")).expect("json");
    assert_eq!(body, serde_json::json!({"email": "a@b.com"}));
}

#[test]
fn login_request_creating_sends_create_flag() {
    let body = serde_json::to_value(LoginRequest::creating("a@b.com")).expect("json");
    assert_eq!(body, serde_json::json!({"email": "a@b.com", "create": true}));
}

#[test]
fn update_request_serializes_only_set_fields() {
    let body = serde_json::to_value(UpdateTaskRequest {
        completed: Some(true),
        ..UpdateTaskRequest::default()
    })
    .expect("json");
    assert_eq!(body, serde_json::json!({"completed": true}));
}

#[test]
fn task_tolerates_missing_optional_fields() {
    let task: Task = serde_json::from_str(
        r#"{"id":"t1","title":"Milk","completed":false,"createdAt":"2026-08-01T09:30:00.000Z"}"#,
    )
    .expect("task");
    assert_eq!(task.description, "");
    assert_eq!(task.user_id, "");
    assert_eq!(task.updated_at, "");
}
