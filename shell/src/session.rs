//! Session state model and the session-provider seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth backend is an opaque collaborator. Whatever adapter talks to it
//! implements [`SessionProvider`]; the route guard and the overlay only ever
//! see [`SessionState`] values delivered through a [`Subscription`].
//!
//! [`SessionChannel`] is the in-memory provider adapters build on. It owns the
//! current state, enforces the lifecycle below and fans changes out to
//! subscribers:
//!
//! ```text
//! Unknown ──▶ Authenticated ⇄ Anonymous
//!    │              │            │
//!    └──────────────┴────────────┴──▶ Errored (terminal)
//! ```

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::subscription::Subscription;

/// Identity status as last reported by the session provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SessionState {
    /// The provider has not answered yet.
    #[default]
    Unknown,
    /// A user is signed in.
    Authenticated { identity_id: String },
    /// Nobody is signed in.
    Anonymous,
    /// The provider failed to resolve the identity.
    Errored { cause: String },
}

impl SessionState {
    #[must_use]
    pub fn kind(&self) -> SessionStateKind {
        match self {
            Self::Unknown => SessionStateKind::Unknown,
            Self::Authenticated { .. } => SessionStateKind::Authenticated,
            Self::Anonymous => SessionStateKind::Anonymous,
            Self::Errored { .. } => SessionStateKind::Errored,
        }
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Identity of the signed-in user, if any.
    #[must_use]
    pub fn identity_id(&self) -> Option<&str> {
        match self {
            Self::Authenticated { identity_id } => Some(identity_id),
            _ => None,
        }
    }
}

impl From<SessionError> for SessionState {
    fn from(err: SessionError) -> Self {
        Self::Errored {
            cause: err.to_string(),
        }
    }
}

/// Payload-free discriminant of [`SessionState`], used in errors and logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionStateKind {
    Unknown,
    Authenticated,
    Anonymous,
    Errored,
}

impl SessionStateKind {
    /// Whether the lifecycle allows moving from `self` to `next`.
    ///
    /// Re-publishing the same kind is allowed except out of the two
    /// one-way states; account switches publish `Authenticated` twice.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        match (self, next) {
            (Self::Errored, _) | (_, Self::Unknown) => false,
            (Self::Unknown | Self::Authenticated | Self::Anonymous, _) => true,
        }
    }
}

impl fmt::Display for SessionStateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Authenticated => "authenticated",
            Self::Anonymous => "anonymous",
            Self::Errored => "errored",
        };
        f.write_str(name)
    }
}

/// Callback receiving every session state change.
pub type SessionCallback = Box<dyn Fn(SessionState)>;

/// External collaborator that knows who the current user is.
pub trait SessionProvider {
    /// Register for state changes. The current state is delivered
    /// synchronously before this returns. Releasing the returned
    /// subscription is synchronous; no callback fires afterwards.
    fn subscribe(&self, callback: SessionCallback) -> Subscription;

    /// Terminate the current session.
    fn sign_out(&self) -> LocalBoxFuture<'static, Result<(), SessionError>>;
}

type SharedCallback = Rc<dyn Fn(SessionState)>;

#[derive(Default)]
struct ChannelInner {
    state: SessionState,
    next_id: u64,
    subscribers: Vec<(u64, SharedCallback)>,
}

impl ChannelInner {
    fn callback(&self, id: u64) -> Option<SharedCallback> {
        self.subscribers
            .iter()
            .find(|(sub_id, _)| *sub_id == id)
            .map(|(_, cb)| Rc::clone(cb))
    }
}

/// In-memory session provider.
///
/// Cloning yields another handle to the same channel.
#[derive(Clone, Default)]
pub struct SessionChannel {
    inner: Rc<RefCell<ChannelInner>>,
}

impl SessionChannel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn current(&self) -> SessionState {
        self.inner.borrow().state.clone()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Publish a new state to all subscribers.
    ///
    /// Publishing the state already held is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidTransition`] when the lifecycle does not
    /// allow the change; the current state is left untouched.
    pub fn publish(&self, next: SessionState) -> Result<(), SessionError> {
        let ids: Vec<u64> = {
            let mut inner = self.inner.borrow_mut();
            if inner.state == next {
                return Ok(());
            }
            let from = inner.state.kind();
            if !from.can_transition_to(next.kind()) {
                return Err(SessionError::InvalidTransition {
                    from,
                    to: next.kind(),
                });
            }
            log::debug!("session {from} -> {}", next.kind());
            inner.state = next.clone();
            inner.subscribers.iter().map(|(id, _)| *id).collect()
        };

        for id in ids {
            // Look each callback up again: an earlier callback may have
            // released it, or published a newer state that already went out.
            let callback = {
                let inner = self.inner.borrow();
                if inner.state != next {
                    break;
                }
                inner.callback(id)
            };
            if let Some(callback) = callback {
                callback(next.clone());
            }
        }
        Ok(())
    }

    fn release(inner: &Weak<RefCell<ChannelInner>>, id: u64) {
        if let Some(inner) = inner.upgrade() {
            inner
                .borrow_mut()
                .subscribers
                .retain(|(sub_id, _)| *sub_id != id);
        }
    }
}

impl SessionProvider for SessionChannel {
    fn subscribe(&self, callback: SessionCallback) -> Subscription {
        let callback: SharedCallback = Rc::from(callback);
        let (id, current) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, Rc::clone(&callback)));
            (id, inner.state.clone())
        };
        callback(current);

        let weak = Rc::downgrade(&self.inner);
        Subscription::new(move || Self::release(&weak, id))
    }

    fn sign_out(&self) -> LocalBoxFuture<'static, Result<(), SessionError>> {
        let result = self
            .publish(SessionState::Anonymous)
            .map_err(|e| SessionError::SignOut(e.to_string()));
        futures::future::ready(result).boxed_local()
    }
}
