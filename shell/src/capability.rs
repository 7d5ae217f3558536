//! Capability detector seam for viewport fullscreen.
//!
//! Hosts differ (standard API, vendor prefixes, none at all). Adapters fold
//! those variants into this one trait so the overlay only asks "is it there,
//! is it on, switch it".

use crate::error::CapabilityError;

pub trait CapabilityDetector {
    /// Whether the host can switch fullscreen at all.
    fn is_available(&self) -> bool;

    /// Live viewport mode, read from the host on every call.
    fn is_fullscreen_active(&self) -> bool;

    /// # Errors
    ///
    /// Returns [`CapabilityError`] if the host refuses or lacks the API.
    fn request_fullscreen_enter(&self) -> Result<(), CapabilityError>;

    /// # Errors
    ///
    /// Returns [`CapabilityError`] if the host refuses or lacks the API.
    fn request_fullscreen_exit(&self) -> Result<(), CapabilityError>;
}

/// Detector for hosts without any fullscreen support (server rendering).
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFullscreen;

impl CapabilityDetector for NoFullscreen {
    fn is_available(&self) -> bool {
        false
    }

    fn is_fullscreen_active(&self) -> bool {
        false
    }

    fn request_fullscreen_enter(&self) -> Result<(), CapabilityError> {
        Err(CapabilityError::Unavailable)
    }

    fn request_fullscreen_exit(&self) -> Result<(), CapabilityError> {
        Err(CapabilityError::Unavailable)
    }
}
