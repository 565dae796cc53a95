//! Client-side session core: record, roles, persistence, expiry, guard.
//!
//! DESIGN
//! ======
//! The session record is the only persistent client state. It is written
//! exclusively by the login, logout, and expiry flows, and read by every
//! role-aware component through an injected [`store::SessionContext`]
//! rather than ambient global access, so tests can substitute an
//! in-memory store.

pub mod expiry;
pub mod guard;
pub mod record;
pub mod role;
pub mod store;
