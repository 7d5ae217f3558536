//! Client-side shell configuration.
//!
//! Provided once through Leptos context by `App`; the route table and the
//! guard are built from it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use shell::guard::{LandingIntent, RouteGuard};

/// Where the guard sends people, and whether the landing redirect remembers
/// the protected page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    /// Public page anonymous users land on.
    pub landing_path: String,
    /// Fallback destination after sign-in when no intent is pending.
    pub root_path: String,
    pub landing_intent: LandingIntent,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            landing_path: "/land".to_owned(),
            root_path: "/".to_owned(),
            landing_intent: LandingIntent::Discard,
        }
    }
}

impl ShellConfig {
    #[must_use]
    pub fn guard(&self) -> RouteGuard {
        RouteGuard::new(self.landing_path.clone())
            .with_root(self.root_path.clone())
            .with_landing_intent(self.landing_intent)
    }
}
