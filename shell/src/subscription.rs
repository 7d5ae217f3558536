//! Scoped subscription handle shared by every listener in the shell.
//!
//! A `Subscription` wraps the release action for one registration (session
//! callback, DOM listener, ...). Release is synchronous and idempotent, and
//! it also runs when the handle is dropped, so every exit path (close,
//! unmount, error unwinding) gives the registration back.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use std::fmt;

/// Handle to an active registration. Dropping it releases the registration.
#[must_use = "dropping a Subscription releases it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap a release action.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release.
    pub fn noop() -> Self {
        Self { release: None }
    }

    /// Release the registration now. Calling this again is a no-op.
    pub fn unsubscribe(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    /// Whether the registration is still held.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
