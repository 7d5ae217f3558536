//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};
use shell::guard::GuardPolicy;
use shell::surface::NavigationSurface;

use crate::components::surface::Surface;
use crate::config::ShellConfig;
use crate::net::session_provider::HttpSessionProvider;
use crate::state::session::SessionContext;

/// Screens the route table can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    /// Protected home: fare calculator with the sidebar.
    Fare,
    Login,
    Register,
    /// Public landing page.
    Land,
}

const ROUTES: &[(&str, Option<GuardPolicy>, Page)] = &[
    ("/", Some(GuardPolicy::RequiresSession), Page::Fare),
    ("/login", Some(GuardPolicy::RequiresNoSession), Page::Login),
    ("/register", Some(GuardPolicy::RequiresNoSession), Page::Register),
    ("/land", None, Page::Land),
];

/// Build the application route table. Unknown paths go to the landing page.
pub fn route_table(config: &ShellConfig) -> NavigationSurface<Page> {
    let mut surface = NavigationSurface::new(config.guard());
    for &(path, policy, page) in ROUTES {
        if let Err(e) = surface.register_route(path, policy, page) {
            leptos::logging::warn!("route table: {e}");
        }
    }
    surface.set_fallback_redirect(&config.landing_path);
    surface
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the session provider once, mirrors it into context, and hands
/// every path to the guarded [`Surface`]. The concrete provider is provided
/// too so the sign-in forms can ask it to re-resolve.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ShellConfig::default();
    let surface = StoredValue::new(route_table(&config));
    provide_context(config);
    provide_context(surface);

    let provider = HttpSessionProvider::new();
    provider.start();
    provide_context(SessionContext::install(Rc::new(provider.clone())));
    provide_context(StoredValue::new_local(provider));

    view! {
        <Stylesheet id="leptos" href="/pkg/firstcabs.css"/>
        <Title text="First Cabs"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=Surface/>
                <Route path=WildcardSegment("path") view=Surface/>
            </Routes>
        </Router>
    }
}
