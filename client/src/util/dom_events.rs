//! Document-level pointer and keyboard listeners.
//!
//! Each registration adds one listener to `document` and returns a
//! [`Subscription`] that removes it. Removal is synchronous; the wasm closure
//! itself is dropped on the next tick because the release usually happens
//! from inside that closure (a dismissal handler closing the overlay).

#[cfg(test)]
#[path = "dom_events_test.rs"]
mod dom_events_test;

use shell::error::ListenerError;
use shell::events::{Handler, Key, OutsideRegion, UiEventSystem};
use shell::subscription::Subscription;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::Closure;

/// Vendor variants of the `fullscreenchange` event.
#[cfg(feature = "hydrate")]
const FULLSCREEN_CHANGE_EVENTS: [&str; 3] =
    ["fullscreenchange", "webkitfullscreenchange", "MSFullscreenChange"];

#[derive(Clone, Copy, Debug, Default)]
pub struct DomEvents;

impl DomEvents {
    /// Fire `handler` whenever the document enters or leaves fullscreen.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError`] outside the browser or when `document`
    /// refuses the listener.
    pub fn on_fullscreen_change(&self, handler: Handler) -> Result<Subscription, ListenerError> {
        #[cfg(feature = "hydrate")]
        {
            let mut subscriptions = Vec::with_capacity(FULLSCREEN_CHANGE_EVENTS.len());
            for event in FULLSCREEN_CHANGE_EVENTS {
                let handler = handler.clone();
                subscriptions.push(listen(event, move |_| handler())?);
            }
            Ok(Subscription::new(move || drop(subscriptions)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = handler;
            Err(unsupported())
        }
    }
}

impl UiEventSystem for DomEvents {
    fn on_pointer_activity(
        &self,
        scope: &OutsideRegion,
        handler: Handler,
    ) -> Result<Subscription, ListenerError> {
        #[cfg(feature = "hydrate")]
        {
            let ids = scope.element_ids().to_vec();
            listen("mousedown", move |ev| {
                if is_outside(&ev, &ids) {
                    handler();
                }
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (scope, handler);
            Err(unsupported())
        }
    }

    fn on_key_signal(&self, key: Key, handler: Handler) -> Result<Subscription, ListenerError> {
        #[cfg(feature = "hydrate")]
        {
            listen("keydown", move |ev| {
                let pressed = ev
                    .dyn_ref::<web_sys::KeyboardEvent>()
                    .is_some_and(|kev| kev.key() == key.dom_key());
                if pressed {
                    handler();
                }
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, handler);
            Err(unsupported())
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn unsupported() -> ListenerError {
    ListenerError::Unsupported("no document outside the browser".to_owned())
}

#[cfg(feature = "hydrate")]
fn listen(
    event: &'static str,
    callback: impl Fn(web_sys::Event) + 'static,
) -> Result<Subscription, ListenerError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ListenerError::Unsupported("document unavailable".to_owned()))?;

    let closure = Closure::wrap(Box::new(callback) as Box<dyn Fn(web_sys::Event)>);
    document
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| ListenerError::Rejected(format!("{event}: {e:?}")))?;

    Ok(Subscription::new(move || {
        let _ = document
            .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        wasm_bindgen_futures::spawn_local(async move {
            drop(closure);
        });
    }))
}

/// True when the event target lies outside every element in `ids`.
///
/// A missing element (not rendered yet) counts as containing the target, so
/// nothing is dismissed against a half-mounted region.
#[cfg(feature = "hydrate")]
fn is_outside(ev: &web_sys::Event, ids: &[String]) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    ids.iter().all(|id| {
        document
            .get_element_by_id(id)
            .is_some_and(|el| !el.contains(target.as_ref()))
    })
}
