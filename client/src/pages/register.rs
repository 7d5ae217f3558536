//! Account creation page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shell::surface::NavigationSurface;

use crate::app::Page;
use crate::components::surface::forward_intent;
use crate::net::session_provider::HttpSessionProvider;
use crate::net::types::Registration;

const MIN_PASSWORD_LEN: usize = 6;

fn registration_from_form(
    name: &str,
    email: &str,
    password: &str,
) -> Result<Registration, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in every field.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok(Registration {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let surface = expect_context::<StoredValue<NavigationSurface<Page>>>();
    let provider = expect_context::<StoredValue<HttpSessionProvider, LocalStorage>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = registration_from_form(&name.get(), &email.get(), &password.get());
        let registration = match form {
            Ok(r) => r,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let Some(provider) = provider.try_get_value() else {
            return;
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        leptos::task::spawn_local(async move {
            match crate::net::api::register(&registration).await {
                Ok(()) => provider.refresh().await,
                Err(e) => {
                    let _ = info.try_set(format!("Sign up failed: {e}"));
                }
            }
            let _ = busy.try_set(false);
        });
    };

    let on_login = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        forward_intent(surface, "/login");
        navigate("/login", Default::default());
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"First Cabs"</h1>
                <p class="login-card__subtitle">"Create an account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        "Sign Up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <a class="login-link" href="/login" on:click=on_login>
                    "Already have an account? Sign in"
                </a>
            </div>
        </div>
    }
}
