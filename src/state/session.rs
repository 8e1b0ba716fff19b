//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionState` is the plain state machine: token, user, and an in-flight
//! flag, with pure transitions that native tests can drive directly.
//! `Session` is the reactive handle around it, constructed exactly once by
//! `App` (the single owner) and handed to pages/components via context. The
//! handle layers persistence and navigation side effects over the pure
//! transitions.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::session_store::{self, SessionRecord};

/// Where `logout()` sends the browser by default.
pub const DEFAULT_LOGOUT_REDIRECT: &str = "/login";

/// Authentication state tracking the held token, current user, and whether
/// a verification round trip is in flight.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionState {
    /// Rebuild state from a persisted record (or its absence).
    pub fn from_record(record: Option<SessionRecord>) -> Self {
        match record {
            Some(rec) => Self {
                token: Some(rec.token),
                user: Some(rec.user),
                loading: false,
            },
            None => Self::default(),
        }
    }

    /// Derived authentication status: a token AND a user must both be held.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Enter the authenticated state with `token` and the whitelisted user
    /// projection of `payload`. Returns `false` (leaving state untouched)
    /// when the payload lacks the required user fields.
    pub fn login(&mut self, token: &str, payload: &serde_json::Value) -> bool {
        let Some(user) = User::from_login_payload(payload) else {
            return false;
        };
        self.token = Some(token.to_owned());
        self.user = Some(user);
        self.loading = false;
        true
    }

    /// Reset to the unauthenticated state. Idempotent.
    pub fn logout(&mut self) {
        self.token = None;
        self.user = None;
        self.loading = false;
    }

    /// Merge a partial update into the current user. No-op (returns
    /// `false`) when no user is authenticated.
    pub fn update_user(&mut self, partial: &serde_json::Value) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        if let Some(user) = self.user.as_mut() {
            user.merge(partial);
            return true;
        }
        false
    }

    /// Whether the current user holds `permission`.
    ///
    /// Placeholder policy: real authorization rules are undefined upstream,
    /// so any user with a role is granted everything. Unauthenticated or
    /// role-less sessions are always denied.
    pub fn has_permission(&self, _permission: &str) -> bool {
        self.user
            .as_ref()
            .and_then(|user| user.role.as_ref())
            .is_some()
    }

    /// The record to persist for this state, when authenticated.
    pub fn record(&self) -> Option<SessionRecord> {
        match (&self.token, &self.user) {
            (Some(token), Some(user)) => Some(SessionRecord {
                token: token.clone(),
                user: user.clone(),
            }),
            _ => None,
        }
    }
}

/// Reactive handle to the one session owned by `App`.
///
/// Cheap to copy; every copy points at the same underlying signal.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Session {
    /// Create the session, seeded from durable storage. Called once at
    /// application start; everything else receives copies via context.
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::from_record(session_store::load())),
        }
    }

    /// The underlying reactive state, for tracking reads in views.
    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    /// Current token without registering a reactive dependency.
    pub fn token_untracked(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token.clone())
    }

    /// Whether a verification round trip may start now: a token is held and
    /// no check is already in flight.
    pub fn can_validate_untracked(&self) -> bool {
        self.state.with_untracked(|s| s.token.is_some() && !s.loading)
    }

    /// Store `token` plus the whitelisted user projection of `payload`, in
    /// memory and in durable storage. The caller has already obtained the
    /// token from the auth API. Returns `false` on a malformed payload.
    pub fn login(&self, token: &str, payload: &serde_json::Value) -> bool {
        let mut ok = false;
        self.state.update(|s| ok = s.login(token, payload));
        if ok {
            if let Some(record) = self.state.with_untracked(SessionState::record) {
                session_store::save(&record);
            }
        }
        ok
    }

    /// Clear storage and state, then navigate to `/login`.
    pub fn logout(&self) {
        self.logout_to(DEFAULT_LOGOUT_REDIRECT);
    }

    /// Clear storage and state, then navigate to `redirect`. Safe to call
    /// repeatedly and when storage is already empty.
    pub fn logout_to(&self, redirect: &str) {
        session_store::clear();
        self.state.update(SessionState::logout);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(redirect);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = redirect;
        }
    }

    /// Merge `partial` into the current user and re-persist. No-op when
    /// unauthenticated.
    pub fn update_user(&self, partial: &serde_json::Value) -> bool {
        let mut ok = false;
        self.state.update(|s| ok = s.update_user(partial));
        if ok {
            if let Some(record) = self.state.with_untracked(SessionState::record) {
                session_store::save(&record);
            }
        }
        ok
    }

    /// Permission check against the current user. See
    /// [`SessionState::has_permission`] for the placeholder policy.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.state.with_untracked(|s| s.has_permission(permission))
    }

    /// Mark a verification round trip as started/finished.
    pub fn set_loading(&self, loading: bool) {
        self.state.update(|s| s.loading = loading);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
