//! Public landing page.
//!
//! Links to sign-in and sign-up forward whatever redirect intent this page is
//! holding, so a user bounced here from a protected page returns to it after
//! signing in.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shell::surface::NavigationSurface;

use crate::app::Page;
use crate::components::surface::forward_intent;

/// `(path, label)` for the landing navigation.
pub const NAV_ITEMS: &[(&str, &str)] =
    &[("/", "Home"), ("/login", "Login"), ("/register", "Signup")];

#[component]
pub fn LandPage() -> impl IntoView {
    let surface = expect_context::<StoredValue<NavigationSurface<Page>>>();
    let navigate = use_navigate();

    view! {
        <div class="land-page">
            <nav class="land-nav">
                <span class="land-nav__brand">"First Cabs"</span>
                <div class="land-nav__links">
                    {NAV_ITEMS
                        .iter()
                        .map(|&(path, label)| {
                            let navigate = navigate.clone();
                            let on_click = move |ev: leptos::ev::MouseEvent| {
                                ev.prevent_default();
                                forward_intent(surface, path);
                                navigate(path, Default::default());
                            };
                            view! {
                                <a class="land-nav__link" href=path on:click=on_click>
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </nav>
        </div>
    }
}
