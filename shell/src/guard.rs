//! Route guard: maps (policy, session state) to a render decision.
//!
//! The guard never navigates by itself. It returns a [`GuardOutcome`] and the
//! navigation surface acts on it. Decision table:
//!
//! | session         | `RequiresSession`        | `RequiresNoSession`           |
//! |-----------------|--------------------------|-------------------------------|
//! | `Unknown`       | placeholder              | placeholder                   |
//! | `Errored`       | nothing                  | nothing                       |
//! | `Authenticated` | children                 | redirect to intent or root    |
//! | `Anonymous`     | redirect to landing      | children                      |
//!
//! `Errored` renders nothing instead of redirecting: the target would hit the
//! same failing provider and bounce straight back.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use serde::{Deserialize, Serialize};

use crate::intent::{RedirectIntent, ROOT_PATH};
use crate::session::SessionState;

/// Access requirement declared per route at table construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuardPolicy {
    /// Only signed-in users (e.g. the fare calculator).
    RequiresSession,
    /// Only signed-out users (e.g. login, register).
    RequiresNoSession,
}

/// Whether the redirect from a protected route to the landing page remembers
/// the protected location.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LandingIntent {
    /// The landing page is not what the user asked for, so nothing is kept.
    #[default]
    Discard,
    /// Capture the protected location so a later sign-in can return to it.
    Carry,
}

/// What the view layer should do for the current navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    RenderChildren,
    Redirect { path: String, carry_intent: bool },
    /// Session not resolved yet.
    RenderPlaceholder,
    /// Session provider failed.
    RenderNothing,
}

impl GuardOutcome {
    #[must_use]
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect { .. })
    }
}

/// Decision component shared by every guarded route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteGuard {
    landing_path: String,
    root_path: String,
    landing_intent: LandingIntent,
}

impl RouteGuard {
    /// Guard redirecting anonymous users to `landing_path`.
    pub fn new(landing_path: impl Into<String>) -> Self {
        Self {
            landing_path: landing_path.into(),
            root_path: ROOT_PATH.to_owned(),
            landing_intent: LandingIntent::default(),
        }
    }

    #[must_use]
    pub fn with_root(mut self, root_path: impl Into<String>) -> Self {
        self.root_path = root_path.into();
        self
    }

    #[must_use]
    pub fn with_landing_intent(mut self, landing_intent: LandingIntent) -> Self {
        self.landing_intent = landing_intent;
        self
    }

    #[must_use]
    pub fn landing_path(&self) -> &str {
        &self.landing_path
    }

    #[must_use]
    pub fn root_path(&self) -> &str {
        &self.root_path
    }

    /// Decide what a route with `policy` shows for `session`.
    ///
    /// `intent` is the slot of the navigation being evaluated. It is only
    /// consumed when a signed-in user reaches a `RequiresNoSession` route.
    pub fn evaluate(
        &self,
        policy: GuardPolicy,
        session: &SessionState,
        intent: &mut RedirectIntent,
    ) -> GuardOutcome {
        match (session, policy) {
            (SessionState::Unknown, _) => GuardOutcome::RenderPlaceholder,
            (SessionState::Errored { .. }, _) => GuardOutcome::RenderNothing,
            (SessionState::Authenticated { .. }, GuardPolicy::RequiresSession)
            | (SessionState::Anonymous, GuardPolicy::RequiresNoSession) => {
                GuardOutcome::RenderChildren
            }
            (SessionState::Anonymous, GuardPolicy::RequiresSession) => GuardOutcome::Redirect {
                path: self.landing_path.clone(),
                carry_intent: self.landing_intent == LandingIntent::Carry,
            },
            (SessionState::Authenticated { .. }, GuardPolicy::RequiresNoSession) => {
                GuardOutcome::Redirect {
                    path: intent.consume_or(&self.root_path),
                    carry_intent: false,
                }
            }
        }
    }
}
