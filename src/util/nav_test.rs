use super::*;

#[test]
fn top_level_paths_resolve_their_titles() {
    assert_eq!(page_title("/"), "Home");
    assert_eq!(page_title("/admin"), "Admin");
}

#[test]
fn submenu_paths_resolve_their_titles() {
    assert_eq!(page_title("/new-user"), "New User");
    assert_eq!(page_title("/manage-users"), "Manage Users");
}

#[test]
fn unknown_paths_fall_back_to_dashboard() {
    assert_eq!(page_title("/edit-user/u1"), "Dashboard");
    assert_eq!(page_title("/nowhere"), "Dashboard");
}

#[test]
fn admin_group_nests_the_user_management_routes() {
    let admin = NAV_ITEMS.iter().find(|item| item.title == "Admin").unwrap();
    let hrefs: Vec<&str> = admin.submenu.iter().map(|item| item.href).collect();
    assert_eq!(hrefs, vec!["/new-user", "/manage-users"]);
}
