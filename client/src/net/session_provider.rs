//! Session provider backed by the auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Created once by `App`. In the browser `start` asks `/api/auth/me` who is
//! signed in and publishes the answer through a [`SessionChannel`]; during
//! server rendering nothing is fetched and the session stays `Unknown`, so
//! guarded routes render their placeholder until hydration resolves it.

#[cfg(test)]
#[path = "session_provider_test.rs"]
mod session_provider_test;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use shell::error::SessionError;
use shell::session::{SessionCallback, SessionChannel, SessionProvider, SessionState};
use shell::subscription::Subscription;

use super::api;
use super::types::User;

/// Map an `/api/auth/me` lookup onto a session state.
pub fn session_from_lookup(lookup: Result<Option<User>, String>) -> SessionState {
    match lookup {
        Ok(Some(user)) => SessionState::Authenticated {
            identity_id: user.id,
        },
        Ok(None) => SessionState::Anonymous,
        Err(cause) => SessionError::Resolution(cause).into(),
    }
}

/// Cloning yields another handle to the same session.
#[derive(Clone, Default)]
pub struct HttpSessionProvider {
    channel: SessionChannel,
}

impl HttpSessionProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> SessionState {
        self.channel.current()
    }

    /// Kick off the first resolution (browser only).
    pub fn start(&self) {
        #[cfg(feature = "hydrate")]
        {
            let provider = self.clone();
            leptos::task::spawn_local(async move {
                provider.refresh().await;
            });
        }
    }

    /// Ask the server again, e.g. after the sign-in form succeeded.
    pub async fn refresh(&self) {
        let lookup = api::fetch_current_user().await;
        self.apply(session_from_lookup(lookup));
    }

    fn apply(&self, next: SessionState) {
        if let Err(e) = self.channel.publish(next) {
            log::warn!("session update dropped: {e}");
        }
    }
}

impl SessionProvider for HttpSessionProvider {
    fn subscribe(&self, callback: SessionCallback) -> Subscription {
        self.channel.subscribe(callback)
    }

    fn sign_out(&self) -> LocalBoxFuture<'static, Result<(), SessionError>> {
        let channel = self.channel.clone();
        async move {
            api::logout().await.map_err(SessionError::SignOut)?;
            channel
                .publish(SessionState::Anonymous)
                .map_err(|e| SessionError::SignOut(e.to_string()))
        }
        .boxed_local()
    }
}
