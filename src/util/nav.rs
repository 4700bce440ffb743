//! Static navigation tree for the sidebar and header titles.
//!
//! Configuration data, not runtime state: the tree never changes after
//! compile time, so it lives in consts the sidebar iterates directly.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// One sidebar entry, optionally with a nested submenu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub submenu: &'static [NavItem],
}

/// The admin console's navigation tree.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { title: "Home", href: "/", icon: "⌂", submenu: &[] },
    NavItem {
        title: "Admin",
        href: "/admin",
        icon: "▦",
        submenu: &[
            NavItem { title: "New User", href: "/new-user", icon: "✎", submenu: &[] },
            NavItem { title: "Manage Users", href: "/manage-users", icon: "▤", submenu: &[] },
        ],
    },
];

/// Header title for the current path, walking the tree one level deep.
pub fn page_title(path: &str) -> &'static str {
    for item in NAV_ITEMS {
        if item.href == path {
            return item.title;
        }
        for sub in item.submenu {
            if sub.href == path {
                return sub.title;
            }
        }
    }
    "Dashboard"
}
