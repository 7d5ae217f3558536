//! Hand-written fakes for the collaborator traits.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use crate::capability::CapabilityDetector;
use crate::error::{CapabilityError, ListenerError, SessionError};
use crate::events::{Handler, Key, OutsideRegion, UiEventSystem};
use crate::session::{SessionCallback, SessionProvider};
use crate::subscription::Subscription;

/// Which listener a fake registration belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Registration {
    Pointer(OutsideRegion),
    Key(Key),
}

#[derive(Default)]
struct EventsInner {
    next_id: u64,
    active: Vec<(u64, Registration, Handler)>,
    total_registrations: u32,
    reject_pointer: bool,
    reject_key: bool,
}

/// UI event system that records registrations and lets tests fire them.
#[derive(Clone, Default)]
pub struct FakeEvents {
    inner: Rc<RefCell<EventsInner>>,
}

impl FakeEvents {
    pub fn rejecting_pointer() -> Self {
        let events = Self::default();
        events.inner.borrow_mut().reject_pointer = true;
        events
    }

    pub fn rejecting_key() -> Self {
        let events = Self::default();
        events.inner.borrow_mut().reject_key = true;
        events
    }

    pub fn active_count(&self) -> usize {
        self.inner.borrow().active.len()
    }

    pub fn total_registrations(&self) -> u32 {
        self.inner.borrow().total_registrations
    }

    pub fn active(&self) -> Vec<Registration> {
        self.inner
            .borrow()
            .active
            .iter()
            .map(|(_, reg, _)| reg.clone())
            .collect()
    }

    /// Invoke every active pointer handler.
    pub fn fire_outside(&self) {
        self.fire(|reg| matches!(reg, Registration::Pointer(_)));
    }

    /// Invoke every active Escape handler.
    pub fn fire_escape(&self) {
        self.fire(|reg| matches!(reg, Registration::Key(Key::Escape)));
    }

    fn fire(&self, filter: impl Fn(&Registration) -> bool) {
        let handlers: Vec<Handler> = self
            .inner
            .borrow()
            .active
            .iter()
            .filter(|(_, reg, _)| filter(reg))
            .map(|(_, _, handler)| Rc::clone(handler))
            .collect();
        for handler in handlers {
            handler();
        }
    }

    fn register(&self, registration: Registration, handler: Handler) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.total_registrations += 1;
            inner.active.push((id, registration, handler));
            id
        };
        let inner = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.borrow_mut().active.retain(|(sub_id, _, _)| *sub_id != id);
            }
        })
    }
}

impl UiEventSystem for FakeEvents {
    fn on_pointer_activity(
        &self,
        scope: &OutsideRegion,
        handler: Handler,
    ) -> Result<Subscription, ListenerError> {
        if self.inner.borrow().reject_pointer {
            return Err(ListenerError::Rejected("pointer".to_owned()));
        }
        Ok(self.register(Registration::Pointer(scope.clone()), handler))
    }

    fn on_key_signal(&self, key: Key, handler: Handler) -> Result<Subscription, ListenerError> {
        if self.inner.borrow().reject_key {
            return Err(ListenerError::Rejected("key".to_owned()));
        }
        Ok(self.register(Registration::Key(key), handler))
    }
}

/// Capability detector with a scripted viewport.
#[derive(Default)]
pub struct FakeViewport {
    pub available: bool,
    pub active: Cell<bool>,
    pub reject: bool,
    pub enter_calls: Cell<u32>,
    pub exit_calls: Cell<u32>,
}

impl FakeViewport {
    pub fn available() -> Self {
        Self {
            available: true,
            ..Self::default()
        }
    }

    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn rejecting() -> Self {
        Self {
            available: true,
            reject: true,
            ..Self::default()
        }
    }
}

impl CapabilityDetector for FakeViewport {
    fn is_available(&self) -> bool {
        self.available
    }

    fn is_fullscreen_active(&self) -> bool {
        self.active.get()
    }

    fn request_fullscreen_enter(&self) -> Result<(), CapabilityError> {
        self.enter_calls.set(self.enter_calls.get() + 1);
        if self.reject {
            return Err(CapabilityError::Rejected("no user gesture".to_owned()));
        }
        self.active.set(true);
        Ok(())
    }

    fn request_fullscreen_exit(&self) -> Result<(), CapabilityError> {
        self.exit_calls.set(self.exit_calls.get() + 1);
        if self.reject {
            return Err(CapabilityError::Rejected("no user gesture".to_owned()));
        }
        self.active.set(false);
        Ok(())
    }
}

/// Session provider that only counts sign-out requests.
#[derive(Default)]
pub struct CountingSession {
    pub sign_outs: Rc<Cell<u32>>,
}

impl SessionProvider for CountingSession {
    fn subscribe(&self, _callback: SessionCallback) -> Subscription {
        Subscription::noop()
    }

    fn sign_out(&self) -> LocalBoxFuture<'static, Result<(), SessionError>> {
        self.sign_outs.set(self.sign_outs.get() + 1);
        futures::future::ready(Ok(())).boxed_local()
    }
}
