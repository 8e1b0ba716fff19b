//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and shared form surfaces while reading the
//! session from the Leptos context provider.

pub mod error_banner;
pub mod nav_bar;
