//! Password change page for authenticated users.
//!
//! ERROR HANDLING
//! ==============
//! A new/confirm mismatch is a pure client-side validation error: it is
//! shown inline and nothing is sent, so session state never changes.

#[cfg(test)]
#[path = "change_password_test.rs"]
mod change_password_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::state::session::Session;
use crate::util::auth::install_unauth_redirect;

/// Require all three fields and a matching confirmation. Passwords are not
/// trimmed; whitespace is significant.
fn validate_change_password_input(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(String, String), &'static str> {
    if current.is_empty() || new.is_empty() || confirm.is_empty() {
        return Err("Fill in all password fields.");
    }
    if new != confirm {
        return Err("Passwords do not match.");
    }
    Ok((current.to_owned(), new.to_owned()))
}

/// Change-password page — sends current + new password with the session's
/// bearer token.
#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let session = expect_context::<Session>();
    install_unauth_redirect(session, use_navigate());

    let current = RwSignal::new(String::new());
    let new = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        info.set(String::new());
        let (current_value, new_value) =
            match validate_change_password_input(&current.get(), &new.get(), &confirm.get()) {
                Ok(values) => values,
                Err(msg) => {
                    error.set(Some(msg.to_owned()));
                    return;
                }
            };
        let Some(token) = session.token_untracked() else {
            // The redirect guard will take over momentarily.
            return;
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::change_password(&current_value, &new_value, &token).await {
                Ok(()) => {
                    current.set(String::new());
                    new.set(String::new());
                    confirm.set(String::new());
                    info.set("Password updated.".to_owned());
                }
                Err(e) => error.set(Some(e)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (current_value, new_value, token);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Change Password"</h1>
                <ErrorBanner error=error/>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Current password"
                        prop:value=move || current.get()
                        on:input=move |ev| current.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="New password"
                        prop:value=move || new.get()
                        on:input=move |ev| new.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm new password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Updating..." } else { "Update Password" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
