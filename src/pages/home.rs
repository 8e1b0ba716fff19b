//! Authenticated landing page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;
use crate::util::auth::install_unauth_redirect;

/// Home page — greets the signed-in user and links to account actions.
/// Redirects to `/login` when unauthenticated.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<Session>();
    install_unauth_redirect(session, use_navigate());

    let greeting = move || {
        session
            .state()
            .get()
            .user
            .map_or_else(String::new, |u| format!("Welcome, {}", u.name))
    };
    let validating = move || session.state().get().loading;

    view! {
        <div class="home-page">
            <h1>{greeting}</h1>
            <Show when=validating>
                <p class="home-page__status">"Checking session..."</p>
            </Show>
            <div class="home-page__links">
                <a href="/profile" class="btn">"View profile"</a>
                <a href="/change-password" class="btn">"Change password"</a>
            </div>
        </div>
    }
}
