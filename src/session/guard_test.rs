use super::*;

#[test]
fn no_session_always_redirects_to_login() {
    assert_eq!(guard_decision(false, None, None), GuardDecision::ToLogin);
    assert_eq!(
        guard_decision(false, Some(Role::Admin), Some(Role::Admin)),
        GuardDecision::ToLogin
    );
    assert_eq!(
        guard_decision(false, None, Some(Role::Student)),
        GuardDecision::ToLogin
    );
}

#[test]
fn session_without_role_requirement_is_allowed() {
    assert_eq!(guard_decision(true, None, Some(Role::Parent)), GuardDecision::Allow);
    assert_eq!(guard_decision(true, None, None), GuardDecision::Allow);
}

#[test]
fn matching_role_requirement_is_allowed() {
    assert_eq!(
        guard_decision(true, Some(Role::Admin), Some(Role::Admin)),
        GuardDecision::Allow
    );
}

#[test]
fn mismatched_role_requirement_redirects_home() {
    assert_eq!(
        guard_decision(true, Some(Role::Admin), Some(Role::Teacher)),
        GuardDecision::ToHome
    );
}

#[test]
fn unrecognized_stored_role_fails_role_requirements() {
    assert_eq!(
        guard_decision(true, Some(Role::Admin), None),
        GuardDecision::ToHome
    );
}
