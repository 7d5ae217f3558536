//! HTTP access to the auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the REST endpoints, `types` holds their payloads, and
//! `session_provider` turns `/api/auth/me` into the shell's session states.

pub mod api;
pub mod session_provider;
pub mod types;
