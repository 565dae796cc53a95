//! Networking modules for the REST backend boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` selects the API base URL, `types` defines the wire DTOs, and
//! `api` performs the HTTP calls, attaching the session token as a bearer
//! credential. The backend is an opaque collaborator returning JSON.

pub mod api;
pub mod config;
pub mod types;
