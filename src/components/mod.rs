//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the dropdown navigation while reading
//! shared state from Leptos context providers.

pub mod nav_menu;
pub mod site_header;
