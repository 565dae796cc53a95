use super::*;

#[test]
fn valid_credentials_pass_through_trimmed() {
    assert_eq!(
        validate_login_input("  a@b.com ", "x"),
        Ok(("a@b.com".to_owned(), "x".to_owned()))
    );
}

#[test]
fn empty_email_is_rejected() {
    assert_eq!(
        validate_login_input("   ", "secret"),
        Err("Introduce email y contraseña.")
    );
}

#[test]
fn empty_password_is_rejected() {
    assert_eq!(
        validate_login_input("a@b.com", ""),
        Err("Introduce email y contraseña.")
    );
}
