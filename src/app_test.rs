use super::*;

#[test]
fn unknown_paths_redirect_to_login_when_logged_out() {
    assert_eq!(fallback_target(false), "/login");
}

#[test]
fn unknown_paths_redirect_home_when_logged_in() {
    assert_eq!(fallback_target(true), "/");
}
