#![cfg(not(feature = "hydrate"))]

use std::rc::Rc;

use super::*;

fn noop() -> Handler {
    Rc::new(|| {})
}

#[test]
fn pointer_listener_is_unsupported_without_document() {
    let region = OutsideRegion::new(["sidebar-panel"]);
    let err = DomEvents.on_pointer_activity(&region, noop()).unwrap_err();
    assert!(matches!(err, ListenerError::Unsupported(_)));
}

#[test]
fn key_listener_is_unsupported_without_document() {
    let err = DomEvents.on_key_signal(Key::Escape, noop()).unwrap_err();
    assert!(matches!(err, ListenerError::Unsupported(_)));
}

#[test]
fn fullscreen_change_listener_is_unsupported_without_document() {
    assert!(DomEvents.on_fullscreen_change(noop()).is_err());
}
