//! Browser adapters for the shell's collaborator traits.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here compiles for both features. Without `hydrate` there is no
//! document, so listeners are refused and fullscreen reports unavailable.

pub mod dom_events;
pub mod fullscreen;
