//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, submits, redirects)
//! and delegates shared rendering to `components` and `user_form`.

pub mod home;
pub mod login;
pub mod user_edit;
pub(crate) mod user_form;
pub mod user_new;
pub mod users;
