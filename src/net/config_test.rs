use super::*;

#[test]
fn api_base_has_no_trailing_slash() {
    assert!(!api_base().ends_with('/'));
}

#[test]
fn endpoint_appends_the_path_verbatim() {
    let url = endpoint("/login.php");
    assert!(url.starts_with(api_base()));
    assert!(url.ends_with("/login.php"));
}
