//! Background session-token re-validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The validator is the only autonomous activity in the client: a
//! `spawn_local` loop re-verifies the held token every 15 minutes, and a
//! memoized effect re-verifies immediately whenever the token changes
//! (including the initial load from storage). A negative answer or any
//! transport failure forces logout — fail closed, no retry before the next
//! scheduled tick. The `loading` flag doubles as the in-flight guard so
//! ticks never overlap, and an alive flag flipped by `on_cleanup` stops the
//! loop when the app unmounts.

#[cfg(test)]
#[path = "validator_test.rs"]
mod validator_test;

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

use crate::state::session::Session;

/// Time between scheduled verification ticks.
pub const VALIDATION_INTERVAL: std::time::Duration = std::time::Duration::from_secs(15 * 60);

/// Whether a verification outcome must force logout. Network and API
/// failures are treated identically to an explicit `{isValid:false}`.
#[cfg(any(test, feature = "hydrate"))]
fn verification_failed(outcome: &Result<bool, String>) -> bool {
    !matches!(outcome, Ok(true))
}

/// Install token re-validation for `session`: an immediate check whenever
/// the held token changes, plus a periodic check every
/// [`VALIDATION_INTERVAL`]. Must be called inside a reactive owner (the
/// `App` component) so cleanup can cancel the loop.
pub fn install_session_validation(session: Session) {
    #[cfg(feature = "hydrate")]
    {
        // Memoized so loading-flag churn does not re-trigger verification.
        let token = Memo::new(move |_| session.state().with(|s| s.token.clone()));
        Effect::new(move || {
            if token.get().is_some() {
                leptos::task::spawn_local(validate_once(session));
            }
        });

        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(VALIDATION_INTERVAL).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                validate_once(session).await;
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// One verification round trip: skip when no token is held or a check is
/// already in flight; otherwise verify and force logout on any failure.
/// The in-flight flag is always cleared afterwards.
#[cfg(feature = "hydrate")]
async fn validate_once(session: Session) {
    if !session.can_validate_untracked() {
        return;
    }
    let Some(token) = session.token_untracked() else {
        return;
    };
    session.set_loading(true);

    let outcome = crate::net::api::verify_token(&token).await;
    if verification_failed(&outcome) {
        if let Err(reason) = &outcome {
            leptos::logging::warn!("session validation failed: {reason}");
        }
        session.logout();
    }
    session.set_loading(false);
}
