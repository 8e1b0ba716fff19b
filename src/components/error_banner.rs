//! Dismissible inline error banner for form pages.

use leptos::prelude::*;

/// Inline error display. Renders nothing while `error` is `None`; the
/// dismiss button clears the signal.
#[component]
pub fn ErrorBanner(error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="form-error" role="alert">
                <span class="form-error__text">{move || error.get().unwrap_or_default()}</span>
                <button
                    class="form-error__dismiss"
                    title="Dismiss"
                    on:click=move |_| error.set(None)
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
