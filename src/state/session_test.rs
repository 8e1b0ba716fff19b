use super::*;
use crate::util::session_store::{decode_record, encode_record};

fn login_payload() -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "email": "a@b.com",
        "name": "A",
        "role": "user"
    })
}

fn authenticated_state() -> SessionState {
    let mut state = SessionState::default();
    assert!(state.login("tok123", &login_payload()));
    state
}

// =============================================================
// Invariant: is_authenticated == (token && user)
// =============================================================

#[test]
fn default_state_is_unauthenticated() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn invariant_holds_after_every_operation() {
    let mut state = SessionState::default();
    assert_eq!(state.is_authenticated(), state.token.is_some() && state.user.is_some());

    state.login("tok123", &login_payload());
    assert_eq!(state.is_authenticated(), state.token.is_some() && state.user.is_some());

    state.update_user(&serde_json::json!({"name": "B"}));
    assert_eq!(state.is_authenticated(), state.token.is_some() && state.user.is_some());

    state.logout();
    assert_eq!(state.is_authenticated(), state.token.is_some() && state.user.is_some());
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_stores_token_and_whitelisted_user() {
    let mut state = SessionState::default();
    let payload = serde_json::json!({
        "id": 1,
        "email": "a@b.com",
        "name": "A",
        "role": "user",
        "password_hash": "secret",
        "telephone": "555-0000"
    });
    assert!(state.login("tok123", &payload));

    assert_eq!(state.token.as_deref(), Some("tok123"));
    let user = state.user.as_ref().expect("user");
    assert_eq!(user.id, 1);
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.name, "A");
    assert_eq!(user.role.as_deref(), Some("user"));
    // Fields outside the whitelist are dropped.
    assert_eq!(user.telephone, None);
    assert!(state.is_authenticated());
    assert!(!state.loading);
}

#[test]
fn login_with_malformed_payload_leaves_state_untouched() {
    let mut state = SessionState::default();
    assert!(!state.login("tok123", &serde_json::json!({"email": "a@b.com"})));
    assert!(!state.is_authenticated());
    assert!(state.token.is_none());
}

#[test]
fn login_record_round_trips_through_storage_encoding() {
    // login followed by load() after a simulated reload.
    let state = authenticated_state();
    let record = state.record().expect("record");
    let raw = encode_record(&record).expect("encode");
    let reloaded = SessionState::from_record(decode_record(&raw));

    assert_eq!(reloaded.token, state.token);
    assert_eq!(reloaded.user, state.user);
    assert!(reloaded.is_authenticated());
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_is_idempotent() {
    let mut state = authenticated_state();
    state.logout();
    let after_first = (state.token.clone(), state.user.clone(), state.loading);
    state.logout();
    assert_eq!((state.token.clone(), state.user.clone(), state.loading), after_first);
    assert!(!state.is_authenticated());
}

#[test]
fn logout_clears_in_flight_flag() {
    let mut state = authenticated_state();
    state.loading = true;
    state.logout();
    assert!(!state.loading);
}

// =============================================================
// Update user
// =============================================================

#[test]
fn update_user_changes_only_targeted_fields_and_preserves_token() {
    let mut state = authenticated_state();
    assert!(state.update_user(&serde_json::json!({"name": "X"})));

    assert_eq!(state.token.as_deref(), Some("tok123"));
    let user = state.user.as_ref().expect("user");
    assert_eq!(user.name, "X");
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.role.as_deref(), Some("user"));
}

#[test]
fn update_user_is_noop_when_logged_out() {
    let mut state = SessionState::default();
    assert!(!state.update_user(&serde_json::json!({"name": "X"})));
    assert!(state.user.is_none());
}

// =============================================================
// Permissions
// =============================================================

#[test]
fn has_permission_denies_unauthenticated_session() {
    let state = SessionState::default();
    assert!(!state.has_permission("delete"));
    assert!(!state.has_permission(""));
    assert!(!state.has_permission("anything-at-all"));
}

#[test]
fn has_permission_denies_user_without_role() {
    let mut state = SessionState::default();
    let payload = serde_json::json!({"id": 2, "email": "x@y.z", "name": "X"});
    assert!(state.login("tok", &payload));
    assert!(!state.has_permission("delete"));
}

#[test]
fn has_permission_grants_any_permission_once_role_present() {
    // Placeholder policy: a role grants everything.
    let state = authenticated_state();
    assert!(state.has_permission("delete"));
    assert!(state.has_permission("publish"));
}

#[test]
fn has_permission_denies_after_forced_logout() {
    let mut state = authenticated_state();
    assert!(state.has_permission("delete"));
    state.logout();
    assert!(!state.has_permission("delete"));
}

// =============================================================
// Persistence projection
// =============================================================

#[test]
fn record_is_none_when_unauthenticated() {
    assert!(SessionState::default().record().is_none());
}

#[test]
fn from_record_restores_authenticated_state_without_loading() {
    let record = authenticated_state().record().expect("record");
    let state = SessionState::from_record(Some(record));
    assert!(state.is_authenticated());
    assert!(!state.loading);
}
