//! Session state mirrored into a Leptos signal.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` installs one [`SessionContext`] for the whole tree. The guarded
//! surface reads `state`; the sidebar hands `provider` to its overlay
//! controller for sign-out.

use std::rc::Rc;

use leptos::prelude::*;
use shell::session::{SessionProvider, SessionState};

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: RwSignal<SessionState>,
    provider: StoredValue<Rc<dyn SessionProvider>, LocalStorage>,
}

impl SessionContext {
    /// Subscribe to `provider` for the lifetime of the current owner.
    ///
    /// The subscription delivers the provider's current state before this
    /// returns and is released when the owner is cleaned up.
    pub fn install(provider: Rc<dyn SessionProvider>) -> Self {
        let state = RwSignal::new(SessionState::Unknown);
        let subscription = provider.subscribe(Box::new(move |next| {
            let _ = state.try_set(next);
        }));
        let subscription = StoredValue::new_local(Some(subscription));
        on_cleanup(move || {
            subscription.try_update_value(Option::take);
        });

        Self {
            state,
            provider: StoredValue::new_local(provider),
        }
    }

    /// The provider, unless the owning scope is already disposed.
    pub fn provider(&self) -> Option<Rc<dyn SessionProvider>> {
        self.provider.try_get_value()
    }
}
