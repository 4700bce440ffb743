use super::*;

#[test]
fn edit_route_embeds_user_id() {
    assert_eq!(edit_user_route("u123"), "/edit-user/u123");
}

#[test]
fn page_error_messages_stay_generic() {
    assert_eq!(FETCH_USERS_FAILED, "Failed to fetch users.");
    assert_eq!(DELETE_USER_FAILED, "Failed to delete user.");
}
