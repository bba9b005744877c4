//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `menu`, `session`) so individual
//! components can depend on small focused models.

pub mod auth;
pub mod menu;
pub mod session;
