//! Profile page showing the current account with name/avatar editing.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::state::session::Session;
use crate::util::auth::install_unauth_redirect;

/// Build the partial-update payload for the session. The name is required;
/// a blank avatar clears the stored one (`null`).
fn profile_update_payload(name: &str, avatar: &str) -> Result<serde_json::Value, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter a name.");
    }
    let avatar = avatar.trim();
    let avatar_value = if avatar.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::Value::String(avatar.to_owned())
    };
    Ok(serde_json::json!({ "name": name, "avatar": avatar_value }))
}

/// Profile page — read-only account details plus an edit form whose saves
/// go through `Session::update_user` (merged and re-persisted locally).
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<Session>();
    install_unauth_redirect(session, use_navigate());

    let initial = session.state().get_untracked().user;
    let name = RwSignal::new(initial.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let avatar = RwSignal::new(
        initial
            .as_ref()
            .and_then(|u| u.avatar.clone())
            .unwrap_or_default(),
    );
    let error = RwSignal::new(None::<String>);
    let info = RwSignal::new(String::new());

    // Placeholder policy grants this to any user with a role; role-less and
    // logged-out sessions see a read-only profile.
    let can_edit = session.has_permission("profile:edit");

    let email = move || {
        session
            .state()
            .get()
            .user
            .map_or_else(String::new, |u| u.email)
    };
    let role = move || {
        session
            .state()
            .get()
            .user
            .and_then(|u| u.role)
            .unwrap_or_else(|| "—".to_owned())
    };
    let telephone = move || {
        session
            .state()
            .get()
            .user
            .and_then(|u| u.telephone)
            .unwrap_or_else(|| "—".to_owned())
    };
    let avatar_url = move || session.state().get().user.and_then(|u| u.avatar);

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        info.set(String::new());
        match profile_update_payload(&name.get(), &avatar.get()) {
            Ok(payload) => {
                error.set(None);
                if session.update_user(&payload) {
                    info.set("Profile updated.".to_owned());
                }
            }
            Err(msg) => error.set(Some(msg.to_owned())),
        }
    };

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>

            <div class="profile-card">
                <Show when=move || avatar_url().is_some()>
                    <img
                        class="profile-card__avatar"
                        src=move || avatar_url().unwrap_or_default()
                        alt="Avatar"
                    />
                </Show>
                <div class="profile-card__row">
                    <span class="profile-card__label">"Email"</span>
                    <span class="profile-card__value">{email}</span>
                </div>
                <div class="profile-card__row">
                    <span class="profile-card__label">"Role"</span>
                    <span class="profile-card__value">{role}</span>
                </div>
                <div class="profile-card__row">
                    <span class="profile-card__label">"Telephone"</span>
                    <span class="profile-card__value">{telephone}</span>
                </div>
            </div>

            <ErrorBanner error=error/>
            <Show when=move || can_edit>
                <form class="auth-form" on:submit=on_save>
                    <label class="profile-form__label">
                        "Name"
                        <input
                            class="auth-input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="profile-form__label">
                        "Avatar URL"
                        <input
                            class="auth-input"
                            type="url"
                            placeholder="https://..."
                            prop:value=move || avatar.get()
                            on:input=move |ev| avatar.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="auth-button" type="submit">"Save"</button>
                </form>
            </Show>
            <Show when=move || !info.get().is_empty()>
                <p class="auth-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
