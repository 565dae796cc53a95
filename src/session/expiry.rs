//! Time-based session expiry on top of raw token presence.
//!
//! DESIGN
//! ======
//! The check runs at application start and again on every protected-route
//! evaluation, so a long-lived tab cannot outlive the expiry window until
//! its next cold reload. Expiry is client-clock based and unrelated to
//! request timeouts.

#[cfg(test)]
#[path = "expiry_test.rs"]
mod expiry_test;

use crate::session::store::SessionContext;

/// Maximum allowed session age before forced logout: 2 hours.
pub const EXPIRY_WINDOW_MS: i64 = 2 * 60 * 60 * 1000;

/// Outcome of an expiry evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpiryCheck {
    /// No usable login timestamp; the session is never force-expired.
    NoTimestamp,
    /// The session is still inside the window.
    Fresh,
    /// The window was exceeded; the store has been cleared.
    Expired,
}

/// Whether a session aged `now_ms - login_at_ms` has exceeded `window_ms`.
///
/// A missing timestamp is never expired. Age exactly equal to the window
/// is still fresh; only strictly older sessions expire.
pub fn is_expired(login_at_ms: Option<i64>, now_ms: i64, window_ms: i64) -> bool {
    match login_at_ms {
        Some(login_at) => now_ms.saturating_sub(login_at) > window_ms,
        None => false,
    }
}

/// Evaluate expiry against the store and destroy the session if exceeded.
///
/// On [`ExpiryCheck::Expired`] the caller must force a full view restart
/// (see [`force_reload`]) so initialization re-runs and lands on login.
pub fn check_and_expire(session: &SessionContext, now_ms: i64) -> ExpiryCheck {
    let Some(login_at) = session.login_at_ms() else {
        return ExpiryCheck::NoTimestamp;
    };
    if is_expired(Some(login_at), now_ms, EXPIRY_WINDOW_MS) {
        session.clear();
        ExpiryCheck::Expired
    } else {
        ExpiryCheck::Fresh
    }
}

/// Reload the page so the application restarts unauthenticated.
pub fn force_reload() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}
