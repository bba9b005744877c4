//! # edunova
//!
//! Leptos + WASM client for the EduNova learning platform: course
//! navigation, a login screen, and static cohort pages for three courses.
//! Everything runs in the browser; there is no backend and no persistence
//! beyond a local dark-mode preference.

pub mod app;
pub mod catalog;
pub mod components;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;
