//! Slide-in overlay controller: open/closed state, dismissal listeners and
//! the fullscreen toggle.
//!
//! LIFECYCLE
//! =========
//! `Closed` ⇄ `Open`. Only an explicit toggle/open opens the panel. Closing
//! happens through the toggle, an outside pointer activation or Escape.
//! Entering `Open` registers both dismissal listeners; leaving `Open` by any
//! path releases them before the observer hears about it. Dropping the
//! controller (or calling [`OverlayController::unmount`]) releases them too.
//!
//! Listener callbacks hold only a `Weak` handle to the controller, so a
//! late-firing DOM event after unmount finds nothing to close.
//!
//! Repeated transitions are no-ops and emit nothing, so when one gesture trips
//! both triggers the observer still sees a single close.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::capability::CapabilityDetector;
use crate::error::{CapabilityError, SessionError};
use crate::events::{Handler, Key, OutsideRegion, UiEventSystem};
use crate::session::SessionProvider;
use crate::subscription::Subscription;

/// Visible state of one overlay instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlayState {
    pub is_open: bool,
    /// Best-effort mirror of the host viewport mode; the user can leave
    /// fullscreen without going through the controller.
    pub is_fullscreen: bool,
}

/// Independent signals that both close the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DismissalTrigger {
    OutsideActivation,
    EscapeSignal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseCause {
    Toggle,
    Dismissed(DismissalTrigger),
}

/// A state change that actually happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayTransition {
    Opened,
    Closed(CloseCause),
    FullscreenChanged(bool),
}

/// Result of [`OverlayController::toggle_fullscreen`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FullscreenOutcome {
    Entered,
    Exited,
    /// Host has no fullscreen support; nothing changed.
    Unavailable,
    /// Host refused the request; nothing changed.
    Rejected,
}

type Observer = Rc<dyn Fn(OverlayTransition, OverlayState)>;

struct Shared {
    state: Cell<OverlayState>,
    listeners: RefCell<Vec<Subscription>>,
    dismissal_enabled: Cell<bool>,
    observer: RefCell<Option<Observer>>,
    events: Rc<dyn UiEventSystem>,
    capability: Rc<dyn CapabilityDetector>,
    session: Rc<dyn SessionProvider>,
    region: OutsideRegion,
}

impl Shared {
    fn open(self: &Rc<Self>) -> bool {
        let mut state = self.state.get();
        if state.is_open {
            return false;
        }
        state.is_open = true;
        self.state.set(state);
        self.register_listeners();
        self.notify(OverlayTransition::Opened);
        true
    }

    fn close(&self, cause: CloseCause) -> bool {
        let mut state = self.state.get();
        if !state.is_open {
            return false;
        }
        state.is_open = false;
        self.state.set(state);
        self.release_listeners();
        self.notify(OverlayTransition::Closed(cause));
        true
    }

    fn register_listeners(self: &Rc<Self>) {
        if !self.dismissal_enabled.get() {
            return;
        }

        let pointer = self
            .events
            .on_pointer_activity(
                &self.region,
                self.dismiss_handler(DismissalTrigger::OutsideActivation),
            );
        let key = self
            .events
            .on_key_signal(Key::Escape, self.dismiss_handler(DismissalTrigger::EscapeSignal));

        match (pointer, key) {
            (Ok(pointer), Ok(key)) => {
                let mut listeners = self.listeners.borrow_mut();
                listeners.push(pointer);
                listeners.push(key);
            }
            // Whichever registration did succeed is dropped with the tuple.
            (Err(err), _) | (_, Err(err)) => {
                self.dismissal_enabled.set(false);
                log::warn!("overlay dismissal disabled: {err}");
            }
        }
    }

    fn dismiss_handler(self: &Rc<Self>, trigger: DismissalTrigger) -> Handler {
        let weak = Rc::downgrade(self);
        Rc::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.close(CloseCause::Dismissed(trigger));
            }
        })
    }

    fn release_listeners(&self) {
        let released = std::mem::take(&mut *self.listeners.borrow_mut());
        drop(released);
    }

    fn set_fullscreen(&self, active: bool) {
        let mut state = self.state.get();
        if state.is_fullscreen == active {
            return;
        }
        state.is_fullscreen = active;
        self.state.set(state);
        self.notify(OverlayTransition::FullscreenChanged(active));
    }

    fn notify(&self, transition: OverlayTransition) {
        let observer = self.observer.borrow().clone();
        if let Some(observer) = observer {
            observer(transition, self.state.get());
        }
    }
}

/// Owner of one rendered overlay's state.
pub struct OverlayController {
    shared: Rc<Shared>,
}

impl OverlayController {
    /// Create a closed overlay.
    ///
    /// `region` names the panel and its toggle button: pointer activity inside
    /// them is not an outside activation.
    pub fn new(
        events: Rc<dyn UiEventSystem>,
        capability: Rc<dyn CapabilityDetector>,
        session: Rc<dyn SessionProvider>,
        region: OutsideRegion,
    ) -> Self {
        Self {
            shared: Rc::new(Shared {
                state: Cell::new(OverlayState::default()),
                listeners: RefCell::new(Vec::new()),
                dismissal_enabled: Cell::new(true),
                observer: RefCell::new(None),
                events,
                capability,
                session,
                region,
            }),
        }
    }

    #[must_use]
    pub fn state(&self) -> OverlayState {
        self.shared.state.get()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state().is_open
    }

    /// Number of dismissal listeners currently held.
    #[must_use]
    pub fn active_listeners(&self) -> usize {
        self.shared.listeners.borrow().len()
    }

    /// False once the event system refused a listener; the overlay then only
    /// closes through the toggle.
    #[must_use]
    pub fn dismissal_enabled(&self) -> bool {
        self.shared.dismissal_enabled.get()
    }

    /// Receive every real transition together with the resulting state.
    pub fn set_observer(&self, observer: impl Fn(OverlayTransition, OverlayState) + 'static) {
        *self.shared.observer.borrow_mut() = Some(Rc::new(observer));
    }

    /// Flip between open and closed. Returns the new `is_open`.
    pub fn toggle(&self) -> bool {
        if self.is_open() {
            self.shared.close(CloseCause::Toggle);
        } else {
            self.shared.open();
        }
        self.is_open()
    }

    /// Open the overlay. Returns `false` when it was already open.
    pub fn open(&self) -> bool {
        self.shared.open()
    }

    /// Close through the explicit control. Returns `false` when already closed.
    pub fn close(&self) -> bool {
        self.shared.close(CloseCause::Toggle)
    }

    /// Close in response to a dismissal signal. Returns `false` when already
    /// closed.
    pub fn dismiss(&self, trigger: DismissalTrigger) -> bool {
        self.shared.close(CloseCause::Dismissed(trigger))
    }

    /// Enter or leave viewport fullscreen based on the host's live mode.
    ///
    /// Failures are logged and reported through the outcome; the mirrored
    /// `is_fullscreen` only changes when the host accepted the request.
    pub fn toggle_fullscreen(&self) -> FullscreenOutcome {
        let capability = &self.shared.capability;
        if !capability.is_available() {
            log::warn!("fullscreen toggle ignored: {}", CapabilityError::Unavailable);
            return FullscreenOutcome::Unavailable;
        }

        let leaving = capability.is_fullscreen_active();
        let result = if leaving {
            capability.request_fullscreen_exit()
        } else {
            capability.request_fullscreen_enter()
        };

        match result {
            Ok(()) => {
                self.shared.set_fullscreen(!leaving);
                if leaving {
                    FullscreenOutcome::Exited
                } else {
                    FullscreenOutcome::Entered
                }
            }
            Err(CapabilityError::Unavailable) => {
                log::warn!("fullscreen toggle ignored: {}", CapabilityError::Unavailable);
                FullscreenOutcome::Unavailable
            }
            Err(err) => {
                log::warn!("fullscreen toggle failed: {err}");
                FullscreenOutcome::Rejected
            }
        }
    }

    /// Re-read the host viewport mode into the mirror.
    pub fn refresh_fullscreen(&self) {
        let capability = &self.shared.capability;
        let active = capability.is_available() && capability.is_fullscreen_active();
        self.shared.set_fullscreen(active);
    }

    /// Forward a logout to the session provider.
    pub fn sign_out(&self) -> LocalBoxFuture<'static, Result<(), SessionError>> {
        self.shared.session.sign_out()
    }

    /// Tear down: release listeners and stop notifying. The observer usually
    /// points into UI state that is being disposed, so no event is emitted.
    pub fn unmount(&self) {
        self.shared.observer.borrow_mut().take();
        let mut state = self.shared.state.get();
        state.is_open = false;
        self.shared.state.set(state);
        self.shared.release_listeners();
    }
}

impl fmt::Debug for OverlayController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayController")
            .field("state", &self.state())
            .field("active_listeners", &self.active_listeners())
            .field("dismissal_enabled", &self.dismissal_enabled())
            .finish_non_exhaustive()
    }
}
