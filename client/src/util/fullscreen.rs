//! Viewport fullscreen detector.
//!
//! Browsers expose the API under the standard name or a `webkit`/`ms`
//! prefix. Methods are looked up by reflection in that order, so one
//! availability check covers every variant.

#[cfg(test)]
#[path = "fullscreen_test.rs"]
mod fullscreen_test;

use std::rc::Rc;

use shell::capability::CapabilityDetector;

#[cfg(feature = "hydrate")]
use shell::error::CapabilityError;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue};

#[cfg(any(test, feature = "hydrate"))]
const ENTER_METHODS: [&str; 3] = [
    "requestFullscreen",
    "webkitRequestFullscreen",
    "msRequestFullscreen",
];
#[cfg(any(test, feature = "hydrate"))]
const EXIT_METHODS: [&str; 3] = ["exitFullscreen", "webkitExitFullscreen", "msExitFullscreen"];
#[cfg(any(test, feature = "hydrate"))]
const ELEMENT_PROPERTIES: [&str; 3] = [
    "fullscreenElement",
    "webkitFullscreenElement",
    "msFullscreenElement",
];

/// The detector for the current build: the document in the browser,
/// [`NoFullscreen`](shell::capability::NoFullscreen) on the server.
pub fn fullscreen_detector() -> Rc<dyn CapabilityDetector> {
    #[cfg(feature = "hydrate")]
    {
        Rc::new(DocumentFullscreen)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Rc::new(shell::capability::NoFullscreen)
    }
}

/// Fullscreen on `document.documentElement`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentFullscreen;

#[cfg(feature = "hydrate")]
fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

#[cfg(feature = "hydrate")]
fn find_method(target: &JsValue, names: &[&str]) -> Option<js_sys::Function> {
    names.iter().find_map(|name| {
        js_sys::Reflect::get(target, &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
    })
}

#[cfg(feature = "hydrate")]
fn call_first(target: &JsValue, names: &[&str]) -> Result<(), CapabilityError> {
    let method = find_method(target, names).ok_or(CapabilityError::Unavailable)?;
    method
        .call0(target)
        .map(|_| ())
        .map_err(|e| CapabilityError::Rejected(format!("{e:?}")))
}

#[cfg(feature = "hydrate")]
impl CapabilityDetector for DocumentFullscreen {
    fn is_available(&self) -> bool {
        let Some(document) = document() else {
            return false;
        };
        let can_enter = document
            .document_element()
            .is_some_and(|root| find_method(root.as_ref(), &ENTER_METHODS).is_some());
        can_enter && find_method(document.as_ref(), &EXIT_METHODS).is_some()
    }

    fn is_fullscreen_active(&self) -> bool {
        let Some(document) = document() else {
            return false;
        };
        ELEMENT_PROPERTIES.iter().any(|name| {
            js_sys::Reflect::get(document.as_ref(), &JsValue::from_str(name))
                .is_ok_and(|value| !value.is_null() && !value.is_undefined())
        })
    }

    fn request_fullscreen_enter(&self) -> Result<(), CapabilityError> {
        let root = document()
            .and_then(|d| d.document_element())
            .ok_or(CapabilityError::Unavailable)?;
        call_first(root.as_ref(), &ENTER_METHODS)
    }

    fn request_fullscreen_exit(&self) -> Result<(), CapabilityError> {
        let document = document().ok_or(CapabilityError::Unavailable)?;
        call_first(document.as_ref(), &EXIT_METHODS)
    }
}
