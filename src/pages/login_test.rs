use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  alice  ", "secret"),
        Ok(("alice".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_preserves_password_whitespace() {
    assert_eq!(
        validate_login_input("alice", " pass word "),
        Ok(("alice".to_owned(), " pass word ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter both username and password."));
    assert_eq!(validate_login_input("alice", ""), Err("Enter both username and password."));
    assert_eq!(validate_login_input("", ""), Err("Enter both username and password."));
}
