//! UI event system seam used by the overlay's dismissal triggers.

use std::rc::Rc;

use crate::error::ListenerError;
use crate::subscription::Subscription;

/// Callback fired when a registered signal occurs.
pub type Handler = Rc<dyn Fn()>;

/// Keys the shell listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
}

impl Key {
    /// `KeyboardEvent.key` value for this key.
    #[must_use]
    pub fn dom_key(self) -> &'static str {
        match self {
            Self::Escape => "Escape",
        }
    }
}

/// Region whose outside activations are reported: pointer activity on any
/// element *not* inside one of these ids counts as "outside".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutsideRegion {
    element_ids: Vec<String>,
}

impl OutsideRegion {
    pub fn new<I, S>(element_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            element_ids: element_ids.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn element_ids(&self) -> &[String] {
        &self.element_ids
    }
}

/// Source of pointer and keyboard signals.
///
/// Each registration returns a [`Subscription`]; dropping or releasing it must
/// stop the handler from firing, synchronously.
pub trait UiEventSystem {
    /// Fire `handler` on pointer activity outside `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError`] when the environment refuses the listener.
    fn on_pointer_activity(
        &self,
        scope: &OutsideRegion,
        handler: Handler,
    ) -> Result<Subscription, ListenerError>;

    /// Fire `handler` when `key` is pressed.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError`] when the environment refuses the listener.
    fn on_key_signal(&self, key: Key, handler: Handler) -> Result<Subscription, ListenerError>;
}
