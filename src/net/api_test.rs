use super::*;

#[test]
fn user_endpoint_formats_expected_path() {
    assert_eq!(user_endpoint("u123"), "/api/v1/users/u123");
}

#[test]
fn endpoint_paths_match_backend_contract() {
    assert_eq!(LOGIN_PATH, "/api/v1/users/login");
    assert_eq!(LOGOUT_PATH, "/api/v1/users/logout");
    assert_eq!(CURRENT_USER_PATH, "/api/v1/users/current-user");
    assert_eq!(REGISTER_PATH, "/api/v1/users/register");
    assert_eq!(ALL_USERS_PATH, "/api/v1/users/all-users");
}
