//! # shell
//!
//! Framework-free core of the browser shell: decides per navigation whether
//! protected content may render, remembers where a redirected user wanted to
//! go, and owns the open/closed + fullscreen state of the slide-in overlay.
//!
//! The `client` crate adapts the collaborator traits declared here
//! ([`session::SessionProvider`], [`capability::CapabilityDetector`],
//! [`events::UiEventSystem`]) to the browser and renders the decisions with
//! Leptos. Nothing in this crate touches the DOM.

pub mod capability;
pub mod error;
pub mod events;
pub mod guard;
pub mod intent;
pub mod overlay;
pub mod session;
pub mod subscription;
pub mod surface;

pub use error::{CapabilityError, ListenerError, RouteError, SessionError};
pub use guard::{GuardOutcome, GuardPolicy, LandingIntent, RouteGuard};
pub use intent::{Location, NavigationIntent, RedirectIntent, Transition};
pub use overlay::{DismissalTrigger, OverlayController, OverlayState};
pub use session::{SessionChannel, SessionProvider, SessionState};
pub use subscription::Subscription;
pub use surface::{NavigationSurface, Resolution};

#[cfg(test)]
#[path = "test_support.rs"]
mod test_support;
