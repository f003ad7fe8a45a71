//! UI Components
//!
//! Reusable Leptos components for the site shell.

pub mod header;

pub use header::Header;
