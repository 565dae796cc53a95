use super::*;
use crate::session::store::SessionStore;
use std::sync::Arc;

// =============================================================
// Login outcome folding
// =============================================================

#[test]
fn login_with_token_builds_a_full_record() {
    let resp = LoginResponse {
        token: Some("abc123".to_owned()),
        role: Some("teacher".to_owned()),
        name: Some("Ana".to_owned()),
        surname: Some("Pérez".to_owned()),
        id: Some(4),
        message: None,
    };
    let LoginOutcome::Success(record) = login_outcome(resp, 42_000) else {
        panic!("expected success");
    };
    assert_eq!(record.token, "abc123");
    assert_eq!(record.role, Some(Role::Teacher));
    assert_eq!(record.display_name, "Ana Pérez");
    assert_eq!(record.user_id, 4);
    assert_eq!(record.login_at_ms, 42_000);
}

#[test]
fn login_without_token_fails_with_backend_message() {
    let resp = LoginResponse {
        message: Some("Cuenta bloqueada".to_owned()),
        ..LoginResponse::default()
    };
    assert_eq!(
        login_outcome(resp, 0),
        LoginOutcome::Failure("Cuenta bloqueada".to_owned())
    );
}

#[test]
fn login_without_token_or_message_uses_the_fallback() {
    assert_eq!(
        login_outcome(LoginResponse::default(), 0),
        LoginOutcome::Failure(ERR_BAD_CREDENTIALS.to_owned())
    );
}

#[test]
fn login_with_empty_token_is_a_rejection() {
    let resp = LoginResponse {
        token: Some(String::new()),
        ..LoginResponse::default()
    };
    assert!(matches!(login_outcome(resp, 0), LoginOutcome::Failure(_)));
}

// =============================================================
// Logout resilience
// =============================================================

fn logged_in_context() -> SessionContext {
    let store = Arc::new(crate::session::store::MemoryStore::default());
    store.save(&SessionRecord::from_login(
        "tok".to_owned(),
        Some("parent"),
        Some("Eva"),
        None,
        9,
        1_000,
    ));
    SessionContext::new(store)
}

#[test]
fn failed_remote_logout_still_clears_the_local_session() {
    let ctx = logged_in_context();
    let err = apply_logout(&ctx, Err(ERR_CONNECT.to_owned()));
    assert!(!ctx.has_session());
    assert_eq!(err.as_deref(), Some(ERR_CONNECT));
}

#[test]
fn successful_remote_logout_clears_without_an_error() {
    let ctx = logged_in_context();
    let err = apply_logout(&ctx, Ok(()));
    assert!(!ctx.has_session());
    assert_eq!(err, None);
}

// =============================================================
// Query scoping
// =============================================================

#[test]
fn messages_query_scopes_by_user() {
    assert_eq!(messages_query(12), "/messages.php?user_id=12");
}

#[test]
fn absences_query_scopes_by_role() {
    assert_eq!(
        absences_query(Some(Role::Teacher), 5),
        "/absences.php?teacher_id=5"
    );
    assert_eq!(
        absences_query(Some(Role::Student), 5),
        "/absences.php?student_id=5"
    );
    assert_eq!(
        absences_query(Some(Role::Parent), 5),
        "/absences.php?user_id=5"
    );
    assert_eq!(absences_query(Some(Role::Admin), 5), "/absences.php");
    assert_eq!(absences_query(None, 5), "/absences.php");
}

#[test]
fn reports_query_scopes_by_role() {
    assert_eq!(
        reports_query(Some(Role::Teacher), 8),
        "/reports.php?teacher_id=8"
    );
    assert_eq!(
        reports_query(Some(Role::Student), 8),
        "/reports.php?student_id=8"
    );
    assert_eq!(reports_query(Some(Role::Admin), 8), "/reports.php");
}
