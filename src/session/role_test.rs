use super::*;

#[test]
fn parse_accepts_all_four_roles() {
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
    assert_eq!(Role::parse("teacher"), Some(Role::Teacher));
    assert_eq!(Role::parse("student"), Some(Role::Student));
    assert_eq!(Role::parse("parent"), Some(Role::Parent));
}

#[test]
fn parse_rejects_unknown_and_cased_strings() {
    assert_eq!(Role::parse("director"), None);
    assert_eq!(Role::parse("Admin"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn as_str_round_trips() {
    for role in [Role::Admin, Role::Teacher, Role::Student, Role::Parent] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

#[test]
fn label_or_unknown_falls_back() {
    assert_eq!(label_or_unknown(None), "Desconocido");
    assert_eq!(label_or_unknown(Some(Role::Teacher)), "Profesor");
}
