use super::*;
use crate::state::session::SessionState;

fn authenticated_state() -> SessionState {
    let mut state = SessionState::default();
    let payload = serde_json::json!({
        "id": 1,
        "email": "a@b.com",
        "name": "A",
        "role": "user"
    });
    assert!(state.login("tok123", &payload));
    state
}

#[test]
fn interval_is_fifteen_minutes() {
    assert_eq!(VALIDATION_INTERVAL.as_secs(), 15 * 60);
}

#[test]
fn valid_answer_does_not_fail() {
    assert!(!verification_failed(&Ok(true)));
}

#[test]
fn negative_answer_fails() {
    assert!(verification_failed(&Ok(false)));
}

#[test]
fn transport_error_fails_closed() {
    assert!(verification_failed(&Err("connection refused".to_owned())));
}

#[test]
fn invalid_token_forces_logout_and_denies_permissions() {
    // Server answered {isValid:false} for the stored token.
    let mut state = authenticated_state();
    let outcome: Result<bool, String> = Ok(false);

    if verification_failed(&outcome) {
        state.logout();
    }

    assert!(!state.is_authenticated());
    assert!(!state.has_permission("delete"));
    assert!(!state.has_permission("read"));
}

#[test]
fn valid_token_preserves_session() {
    let mut state = authenticated_state();
    let outcome: Result<bool, String> = Ok(true);

    if verification_failed(&outcome) {
        state.logout();
    }

    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("tok123"));
}
