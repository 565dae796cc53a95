//! Pure access decision for protected routes.
//!
//! DESIGN
//! ======
//! The decision is synchronous and side-effect free; the component wrapper
//! in `components::protected_route` re-evaluates it on every navigation.
//! Role requirements are enforced here as well as in the menu, so hidden
//! admin routes cannot be reached by deep-linking.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::session::role::Role;

/// What the route guard should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested view unmodified.
    Allow,
    /// No session: redirect to the login path.
    ToLogin,
    /// Session present but the role requirement is unmet: redirect home.
    ToHome,
}

/// Decide access for a protected view.
///
/// Absence of a session always wins over role checks; an unrecognized
/// stored role (`current = None`) fails any role requirement.
pub fn guard_decision(
    has_session: bool,
    required: Option<Role>,
    current: Option<Role>,
) -> GuardDecision {
    if !has_session {
        return GuardDecision::ToLogin;
    }
    match required {
        None => GuardDecision::Allow,
        Some(required) if current == Some(required) => GuardDecision::Allow,
        Some(_) => GuardDecision::ToHome,
    }
}
