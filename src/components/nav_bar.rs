//! Top bar displaying the app name, current user identity, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! This component surfaces session metadata and primary navigation controls
//! that remain visible on authenticated routes.

use leptos::prelude::*;

use crate::state::session::Session;

/// Top navigation bar. Identity and logout render only while authenticated.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<Session>();

    let authenticated = move || session.state().get().is_authenticated();
    let user_name = move || {
        session
            .state()
            .get()
            .user
            .map_or_else(|| "—".to_owned(), |u| u.name)
    };

    let on_logout = move |_| {
        // Clears storage, resets state, and navigates to /login.
        session.logout();
    };

    view! {
        <div class="nav-bar">
            <a href="/" class="nav-bar__brand">"Atrium"</a>
            <span class="nav-bar__spacer"></span>
            <Show when=authenticated>
                <a href="/profile" class="nav-bar__link">"Profile"</a>
                <a href="/change-password" class="nav-bar__link">"Password"</a>
                <span class="nav-bar__user">{user_name}</span>
                <button class="btn nav-bar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </Show>
        </div>
    }
}
