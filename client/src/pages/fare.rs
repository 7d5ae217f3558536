//! Protected home screen.

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;

#[component]
pub fn FarePage() -> impl IntoView {
    view! {
        <div class="fare-page">
            <Sidebar/>
            <main class="fare-page__main">
                <h1>"Fare Calculator"</h1>
            </main>
        </div>
    }
}
