//! Sign-in page.
//!
//! On success the session is re-resolved; the guard on this route then sends
//! the now-authenticated user on to the page they originally asked for.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shell::surface::NavigationSurface;

use crate::app::Page;
use crate::components::surface::forward_intent;
use crate::net::session_provider::HttpSessionProvider;
use crate::net::types::Credentials;

/// Trim and check the form fields.
fn credentials_from_form(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(Credentials {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let surface = expect_context::<StoredValue<NavigationSurface<Page>>>();
    let provider = expect_context::<StoredValue<HttpSessionProvider, LocalStorage>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match credentials_from_form(&email.get(), &password.get()) {
            Ok(c) => c,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let Some(provider) = provider.try_get_value() else {
            return;
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        leptos::task::spawn_local(async move {
            match crate::net::api::sign_in(&credentials).await {
                Ok(()) => provider.refresh().await,
                Err(e) => {
                    let _ = info.try_set(format!("Sign in failed: {e}"));
                }
            }
            let _ = busy.try_set(false);
        });
    };

    let on_register = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        forward_intent(surface, "/register");
        navigate("/register", Default::default());
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"First Cabs"</h1>
                <p class="login-card__subtitle">"Sign in"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <a class="login-link" href="/register" on:click=on_register>
                    "Create an account"
                </a>
            </div>
        </div>
    }
}
