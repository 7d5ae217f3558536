//! Error taxonomy for the shell core.
//!
//! ERROR HANDLING
//! ==============
//! None of these are retried inside the core. Session failures surface as
//! `SessionState::Errored` and make the guard render nothing; capability and
//! listener failures degrade the overlay instead of propagating to the caller.

use crate::session::SessionStateKind;

/// Failures reported by or about a session provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The provider could not resolve the current identity.
    #[error("session resolution failed: {0}")]
    Resolution(String),
    /// Terminating the session failed on the provider side.
    #[error("sign-out failed: {0}")]
    SignOut(String),
    /// A state change the session lifecycle does not allow.
    #[error("invalid session transition: {from} -> {to}")]
    InvalidTransition {
        from: SessionStateKind,
        to: SessionStateKind,
    },
}

/// Viewport fullscreen could not be changed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CapabilityError {
    /// The host environment exposes no fullscreen API.
    #[error("fullscreen capability unavailable")]
    Unavailable,
    /// The host refused the request (no user gesture, permissions policy, ...).
    #[error("fullscreen request rejected: {0}")]
    Rejected(String),
}

/// The UI event system refused a listener registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListenerError {
    /// No event target exists in this environment (server render, worker).
    #[error("event listeners unsupported: {0}")]
    Unsupported(String),
    /// The event target rejected the listener.
    #[error("listener registration rejected: {0}")]
    Rejected(String),
}

/// Route table construction or in-memory redirect resolution failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("route already registered: {0}")]
    DuplicateRoute(String),
    #[error("redirect loop detected after {depth} hops starting at {start}")]
    RedirectLoop { start: String, depth: usize },
}
