//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the admin chrome around route pages while reading
//! shared state from Leptos context providers.

pub mod layout;
pub mod sidebar;
