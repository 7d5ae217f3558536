//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `surface` renders whatever the route guard allows, `guard_placeholder` is
//! shown while the session is unresolved, and `sidebar` is the slide-in
//! overlay on protected pages.

pub mod guard_placeholder;
pub mod sidebar;
pub mod surface;
