//! Route-level screens rendered by the guarded surface.

pub mod fare;
pub mod land;
pub mod login;
pub mod register;
