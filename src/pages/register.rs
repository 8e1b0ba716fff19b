//! Registration page posting new accounts to `/auth/signup`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::net::types::RegisterData;

/// Build the signup payload from raw form input. Name and email are
/// required; telephone and avatar are optional and omitted when blank.
fn validate_register_input(
    name: &str,
    email: &str,
    telephone: &str,
    avatar: &str,
) -> Result<RegisterData, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter your email.");
    }
    let telephone = telephone.trim();
    let avatar = avatar.trim();
    Ok(RegisterData {
        name: name.to_owned(),
        email: email.to_owned(),
        telephone: (!telephone.is_empty()).then(|| telephone.to_owned()),
        avatar: (!avatar.is_empty()).then(|| avatar.to_owned()),
    })
}

/// Registration page — on success the visitor is sent to `/login`.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let telephone = RwSignal::new(String::new());
    let avatar = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let data = match validate_register_input(
            &name.get(),
            &email.get(),
            &telephone.get(),
            &avatar.get(),
        ) {
            Ok(data) => data,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&data).await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
                Err(e) => {
                    error.set(Some(e));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = data;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Atrium"</h1>
                <p class="auth-card__subtitle">"Create an account"</p>
                <ErrorBanner error=error/>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="tel"
                        placeholder="Telephone (optional)"
                        prop:value=move || telephone.get()
                        on:input=move |ev| telephone.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="url"
                        placeholder="Avatar URL (optional)"
                        prop:value=move || avatar.get()
                        on:input=move |ev| avatar.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
