//! REST helpers for the auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call reports that it is unavailable; the session
//! is only resolved in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Credentials, Registration, User};

/// How a `/api/auth/me` status code maps onto a session.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MeStatus {
    SignedIn,
    SignedOut,
    Failed,
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_me_status(status: u16) -> MeStatus {
    match status {
        200 => MeStatus::SignedIn,
        401 | 403 => MeStatus::SignedOut,
        _ => MeStatus::Failed,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

/// Fetch the signed-in user from `GET /api/auth/me`.
///
/// `Ok(None)` means the server answered that nobody is signed in.
///
/// # Errors
///
/// Returns an error string on transport failure, an unexpected status, or
/// an unreadable body.
pub async fn fetch_current_user() -> Result<Option<User>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        match classify_me_status(resp.status()) {
            MeStatus::SignedIn => resp.json::<User>().await.map(Some).map_err(|e| e.to_string()),
            MeStatus::SignedOut => Ok(None),
            MeStatus::Failed => Err(request_failed_message("session lookup", resp.status())),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// End the session via `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn logout() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("logout", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Sign in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error string if the request fails or the credentials are
/// rejected.
pub async fn sign_in(credentials: &Credentials) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/auth/login", credentials, "sign in").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server refuses the
/// registration.
pub async fn register(registration: &Registration) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/auth/register", registration, "registration").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = registration;
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(url: &str, body: &T, action: &str) -> Result<(), String> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(action, resp.status()));
    }
    Ok(())
}
