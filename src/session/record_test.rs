use super::*;

// =============================================================
// Display name derivation
// =============================================================

#[test]
fn display_name_joins_name_and_surname() {
    assert_eq!(derive_display_name(Some("Ana"), Some("Pérez")), "Ana Pérez");
}

#[test]
fn display_name_trims_whitespace() {
    assert_eq!(derive_display_name(Some("  Ana "), Some(" Pérez  ")), "Ana Pérez");
}

#[test]
fn display_name_without_surname_is_just_the_name() {
    assert_eq!(derive_display_name(Some("Ana"), None), "Ana");
    assert_eq!(derive_display_name(Some("Ana"), Some("   ")), "Ana");
}

#[test]
fn display_name_defaults_when_name_missing() {
    assert_eq!(derive_display_name(None, Some("Pérez")), "Usuario");
    assert_eq!(derive_display_name(Some("   "), None), "Usuario");
}

// =============================================================
// Record construction
// =============================================================

#[test]
fn from_login_populates_all_fields() {
    let record = SessionRecord::from_login(
        "abc123".to_owned(),
        Some("teacher"),
        Some("Ana"),
        Some("Pérez"),
        7,
        1_000_000,
    );
    assert_eq!(record.token, "abc123");
    assert_eq!(record.role, Some(Role::Teacher));
    assert_eq!(record.display_name, "Ana Pérez");
    assert_eq!(record.user_id, 7);
    assert_eq!(record.login_at_ms, 1_000_000);
}

#[test]
fn from_login_keeps_unknown_role_as_none() {
    let record =
        SessionRecord::from_login("t".to_owned(), Some("janitor"), Some("Eva"), None, 1, 0);
    assert_eq!(record.role, None);
}
