//! User-list state for the manage-users table.
//!
//! DESIGN
//! ======
//! The backend owns user records; this state is a per-page scratch copy
//! that is refetched on mount and after every delete, never cached across
//! navigations.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::types::User;

/// Table state for the manage-users page.
#[derive(Clone, Debug, Default)]
pub struct UsersState {
    pub items: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Division column text; records without a division show a placeholder.
pub fn division_label(user: &User) -> String {
    user.division.clone().unwrap_or_else(|| "N/A".to_owned())
}
