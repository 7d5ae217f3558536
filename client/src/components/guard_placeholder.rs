//! Full-screen loading state shown while the session is unresolved.

use leptos::prelude::*;

#[component]
pub fn GuardPlaceholder() -> impl IntoView {
    view! {
        <div class="guard-placeholder" role="status">
            "Loading..."
        </div>
    }
}
