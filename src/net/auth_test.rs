use super::*;

fn bare_body() -> Value {
    serde_json::json!({
        "token": "tok1",
        "user": {"id": "u1", "email": "a@b.com", "createdAt": "2026-08-01T09:30:00.000Z"}
    })
}

fn wrapped_body() -> Value {
    serde_json::json!({
        "success": true,
        "message": "ok",
        "data": {
            "token": "tok1",
            "expiresIn": 3600,
            "user": {"id": "u1", "email": "a@b.com", "createdAt": "2026-08-01T09:30:00.000Z"}
        }
    })
}

fn expect_success(outcome: Result<LoginOutcome, ApiError>) -> LoginResult {
    match outcome {
        Ok(LoginOutcome::Success(result)) => result,
        other => panic!("expected success, got {other:?}"),
    }
}

// =============================================================
// envelope variants
// =============================================================

#[test]
fn bare_mode_reads_root_payload() {
    let result = expect_success(parse_login_body(&bare_body(), EnvelopeMode::Bare));
    assert_eq!(result.token, "tok1");
    assert_eq!(result.user.email, "a@b.com");
}

#[test]
fn wrapped_mode_reads_data_payload() {
    let result = expect_success(parse_login_body(&wrapped_body(), EnvelopeMode::Wrapped));
    assert_eq!(result.token, "tok1");
    assert_eq!(result.user.id, "u1");
}

#[test]
fn wrapped_mode_without_data_is_a_decode_error() {
    assert!(matches!(
        parse_login_body(&bare_body(), EnvelopeMode::Wrapped),
        Err(ApiError::Decode(_))
    ));
}

#[test]
fn auto_mode_prefers_data_object_when_present() {
    let result = expect_success(parse_login_body(&wrapped_body(), EnvelopeMode::Auto));
    assert_eq!(result.token, "tok1");
}

#[test]
fn auto_mode_falls_back_to_root_payload() {
    let result = expect_success(parse_login_body(&bare_body(), EnvelopeMode::Auto));
    assert_eq!(result.token, "tok1");
}

// =============================================================
// token-less 2xx bodies
// =============================================================

#[test]
fn missing_token_reads_as_unknown_user() {
    let body = serde_json::json!({"success": true, "message": "User not found", "data": {}});
    assert_eq!(
        parse_login_body(&body, EnvelopeMode::Auto),
        Ok(LoginOutcome::UnknownUser(UnknownUserReason::MissingToken))
    );
}

#[test]
fn empty_token_string_reads_as_unknown_user() {
    let body = serde_json::json!({"token": "", "user": {"id": "u1", "email": "a@b.com", "createdAt": "x"}});
    assert_eq!(
        parse_login_body(&body, EnvelopeMode::Bare),
        Ok(LoginOutcome::UnknownUser(UnknownUserReason::MissingToken))
    );
}

// =============================================================
// malformed payloads
// =============================================================

#[test]
fn token_without_user_is_a_decode_error() {
    let body = serde_json::json!({"token": "tok1"});
    assert!(matches!(
        parse_login_body(&body, EnvelopeMode::Bare),
        Err(ApiError::Decode(_))
    ));
}

#[test]
fn garbage_user_object_is_a_decode_error() {
    let body = serde_json::json!({"token": "tok1", "user": {"nope": true}});
    assert!(matches!(
        parse_login_body(&body, EnvelopeMode::Bare),
        Err(ApiError::Decode(_))
    ));
}
