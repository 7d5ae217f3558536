//! Redirect-intent memory: where a redirected user originally wanted to go.
//!
//! DESIGN
//! ======
//! The intent is never global. It rides on a [`Transition`] (the metadata of
//! one redirect) and is handed only to the navigation that arrives at that
//! transition's target. The consuming guard evaluation takes it out with
//! [`RedirectIntent::consume`]; afterwards the slot is empty and any further
//! read falls back to the application root.

#[cfg(test)]
#[path = "intent_test.rs"]
mod intent_test;

use serde::{Deserialize, Serialize};

/// Path the application falls back to when no intent is pending.
pub const ROOT_PATH: &str = "/";

/// The location a navigation targets.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub path: String,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl From<&str> for Location {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// Original destination remembered across a redirect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationIntent {
    pub target_path: String,
}

/// Per-navigation slot holding at most one pending intent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RedirectIntent {
    pending: Option<NavigationIntent>,
}

impl RedirectIntent {
    /// An empty slot.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Remember `location` as the place to return to.
    #[must_use]
    pub fn capture(location: &Location) -> Self {
        Self {
            pending: Some(NavigationIntent {
                target_path: location.path.clone(),
            }),
        }
    }

    /// Take the pending target, or `fallback` when none is pending.
    pub fn consume_or(&mut self, fallback: &str) -> String {
        self.pending
            .take()
            .map_or_else(|| fallback.to_owned(), |intent| intent.target_path)
    }

    /// Take the pending target, or [`ROOT_PATH`] when none is pending.
    pub fn consume(&mut self) -> String {
        self.consume_or(ROOT_PATH)
    }

    #[must_use]
    pub fn peek(&self) -> Option<&NavigationIntent> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Metadata of one in-flight navigation: where it goes and what intent rides
/// along with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub to: Location,
    pub intent: RedirectIntent,
}

impl Transition {
    /// A transition that carries no intent.
    pub fn plain(to: impl Into<String>) -> Self {
        Self {
            to: Location::new(to),
            intent: RedirectIntent::none(),
        }
    }

    /// A transition to `to` that remembers `origin`.
    pub fn capturing(to: impl Into<String>, origin: &Location) -> Self {
        Self {
            to: Location::new(to),
            intent: RedirectIntent::capture(origin),
        }
    }

    /// A transition to `to` that forwards an intent the current navigation
    /// is still holding (e.g. a landing page linking on to sign-in).
    pub fn forwarding(to: impl Into<String>, intent: RedirectIntent) -> Self {
        Self {
            to: Location::new(to),
            intent,
        }
    }

    /// Hand the intent to a navigation arriving at `path`. Arrivals anywhere
    /// else get nothing, and the transition is spent either way.
    #[must_use]
    pub fn arrive(self, path: &str) -> RedirectIntent {
        if self.to.path == path {
            self.intent
        } else {
            if self.intent.is_pending() {
                log::debug!(
                    "dropping redirect intent for {}: arrived at {path}",
                    self.to.path
                );
            }
            RedirectIntent::none()
        }
    }
}
