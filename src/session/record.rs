//! The session record: token, role, display name, user id, login time.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use crate::session::role::Role;

/// Everything the client persists about a logged-in actor.
///
/// Created atomically at login, destroyed atomically at logout or expiry;
/// never partially mutated in between.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionRecord {
    /// Opaque backend credential. Its presence is the authentication signal.
    pub token: String,
    /// Role as issued by the backend; `None` when unrecognized.
    pub role: Option<Role>,
    /// Human-readable name derived from first + last name.
    pub display_name: String,
    /// Numeric id of the authenticated actor.
    pub user_id: i64,
    /// Wall-clock login instant, milliseconds since epoch.
    pub login_at_ms: i64,
}

impl SessionRecord {
    /// Build a record from login-response fields, stamping `now_ms` as the
    /// login instant.
    pub fn from_login(
        token: String,
        role: Option<&str>,
        name: Option<&str>,
        surname: Option<&str>,
        user_id: i64,
        now_ms: i64,
    ) -> Self {
        Self {
            token,
            role: role.and_then(Role::parse),
            display_name: derive_display_name(name, surname),
            user_id,
            login_at_ms: now_ms,
        }
    }
}

/// Join first and last name with single spacing, trimming both parts.
/// A missing or blank first name falls back to "Usuario".
pub fn derive_display_name(name: Option<&str>, surname: Option<&str>) -> String {
    let name = name.map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return "Usuario".to_owned();
    }
    let surname = surname.map(str::trim).unwrap_or_default();
    if surname.is_empty() {
        name.to_owned()
    } else {
        format!("{name} {surname}")
    }
}
