use super::*;
use crate::session::record::SessionRecord;
use crate::session::store::{MemoryStore, SessionStore};
use std::sync::Arc;

const NOW: i64 = 1_700_000_000_000;

fn session_logged_in_at(login_at_ms: i64) -> (Arc<MemoryStore>, SessionContext) {
    let store = Arc::new(MemoryStore::default());
    store.save(&SessionRecord::from_login(
        "tok".to_owned(),
        Some("student"),
        Some("Eva"),
        None,
        3,
        login_at_ms,
    ));
    let ctx = SessionContext::new(store.clone());
    (store, ctx)
}

// =============================================================
// Pure boundary decision
// =============================================================

#[test]
fn one_ms_inside_the_window_is_fresh() {
    assert!(!is_expired(Some(NOW - (EXPIRY_WINDOW_MS - 1)), NOW, EXPIRY_WINDOW_MS));
}

#[test]
fn exactly_the_window_is_fresh() {
    assert!(!is_expired(Some(NOW - EXPIRY_WINDOW_MS), NOW, EXPIRY_WINDOW_MS));
}

#[test]
fn one_ms_past_the_window_is_expired() {
    assert!(is_expired(Some(NOW - (EXPIRY_WINDOW_MS + 1)), NOW, EXPIRY_WINDOW_MS));
}

#[test]
fn missing_timestamp_is_never_expired() {
    assert!(!is_expired(None, NOW, EXPIRY_WINDOW_MS));
}

// =============================================================
// Store interaction
// =============================================================

#[test]
fn fresh_session_is_left_alone() {
    let (_, ctx) = session_logged_in_at(NOW - 1000);
    assert_eq!(check_and_expire(&ctx, NOW), ExpiryCheck::Fresh);
    assert!(ctx.has_session());
}

#[test]
fn expired_session_is_fully_cleared() {
    let (_, ctx) = session_logged_in_at(NOW - (EXPIRY_WINDOW_MS + 1));
    assert_eq!(check_and_expire(&ctx, NOW), ExpiryCheck::Expired);
    assert!(!ctx.has_session());
    assert_eq!(ctx.role(), None);
    assert_eq!(ctx.login_at_ms(), None);
}

#[test]
fn corrupt_timestamp_skips_the_check_and_keeps_the_session() {
    let (store, ctx) = session_logged_in_at(NOW);
    store.set_raw_login_at(Some("garbage"));
    assert_eq!(check_and_expire(&ctx, NOW), ExpiryCheck::NoTimestamp);
    assert!(ctx.has_session());
}

#[test]
fn empty_store_reports_no_timestamp() {
    let ctx = SessionContext::in_memory();
    assert_eq!(check_and_expire(&ctx, NOW), ExpiryCheck::NoTimestamp);
}
