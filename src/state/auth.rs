//! Router-level authentication state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The top-level router owns exactly two states. Login and logout are the
//! only transitions, plus the startup seed from the session store; the
//! asynchronous parts of those flows are not modeled here.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Whether the router considers the user logged in.
///
/// Held in an `RwSignal` provided via context so the login route and the
/// catch-all redirect react to login/logout immediately.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
}
