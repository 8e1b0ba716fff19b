use super::*;

#[test]
fn auth_endpoint_formats_expected_paths() {
    assert_eq!(auth_endpoint("login"), "/api/auth/login");
    assert_eq!(auth_endpoint("signup"), "/api/auth/signup");
    assert_eq!(auth_endpoint("change-password"), "/api/auth/change-password");
    assert_eq!(auth_endpoint("verify"), "/api/auth/verify");
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("tok123"), "Bearer tok123");
}

#[test]
fn error_message_prefers_server_message_then_error() {
    let body = serde_json::json!({"message": "m1", "error": "m2"});
    assert_eq!(error_message(401, Some(&body)), "m1");

    let body = serde_json::json!({"error": "m2"});
    assert_eq!(error_message(401, Some(&body)), "m2");
}

#[test]
fn error_message_falls_back_to_generic_text() {
    assert_eq!(error_message(500, None), "Request failed (500).");

    let body = serde_json::json!({"detail": "ignored"});
    assert_eq!(error_message(502, Some(&body)), "Request failed (502).");
}

#[test]
fn login_outcome_parses_token_and_raw_user() {
    let raw = r#"{"token":"tok123","user":{"id":1,"email":"a@b.com","name":"A","extra":true}}"#;
    let outcome: LoginOutcome = serde_json::from_str(raw).expect("parse");
    assert_eq!(outcome.token, "tok123");
    assert_eq!(outcome.user.get("extra"), Some(&serde_json::json!(true)));
}
