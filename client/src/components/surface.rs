//! Guarded route outlet.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every router path renders this component. It reports the current path to
//! the shared `NavigationSurface`, resolves it against the session signal,
//! and either renders the page, a placeholder, nothing, or replaces the
//! history entry with the redirect target.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use shell::intent::Transition;
use shell::surface::{NavigationSurface, Resolution};

use crate::app::Page;
use crate::components::guard_placeholder::GuardPlaceholder;
use crate::pages::fare::FarePage;
use crate::pages::land::LandPage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::state::session::SessionContext;

/// Prepare a user-initiated navigation to `to` that keeps the intent the
/// current page is holding. Call right before navigating.
pub fn forward_intent(surface: StoredValue<NavigationSurface<Page>>, to: &str) {
    surface.update_value(|s| {
        let held = s.take_intent();
        s.begin(Transition::forwarding(to, held));
    });
}

/// What stays on screen for a resolution. A redirect shows nothing while the
/// router moves, so protected content unmounts as soon as the guard says so.
fn displayed<C: Clone>(resolution: &Resolution<C>) -> Resolution<C> {
    match resolution {
        Resolution::Redirect(_) => Resolution::Nothing,
        other => other.clone(),
    }
}

fn render_page(page: Page) -> AnyView {
    match page {
        Page::Fare => view! { <FarePage/> }.into_any(),
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::Register => view! { <RegisterPage/> }.into_any(),
        Page::Land => view! { <LandPage/> }.into_any(),
    }
}

#[component]
pub fn Surface() -> impl IntoView {
    let surface = expect_context::<StoredValue<NavigationSurface<Page>>>();
    let session = expect_context::<SessionContext>();
    let location = use_location();
    let navigate = use_navigate();
    let resolution = RwSignal::new(Resolution::<Page>::Nothing);

    Effect::new(move || {
        let path = location.pathname.get();
        let state = session.state.get();
        let next = surface.try_update_value(|s| {
            s.arrive(&path);
            s.resolve(&state)
        });
        let Some(next) = next else {
            return;
        };
        let shown = displayed(&next);
        if resolution.get_untracked() != shown {
            resolution.set(shown);
        }
        if let Resolution::Redirect(to) = next {
            navigate(
                &to,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    move || match resolution.get() {
        Resolution::Render(page) => render_page(page),
        Resolution::Placeholder => view! { <GuardPlaceholder/> }.into_any(),
        Resolution::NotFound => "Page not found.".into_any(),
        Resolution::Nothing | Resolution::Redirect(_) => ().into_any(),
    }
}
