//! Haven Community Site
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//!
//! # Features
//!
//! - Sticky header with desktop and mobile navigation
//! - Active nav item synced to the current URL, with a measured underline
//!   indicator
//! - Observable app store for authentication state
//!
//! There is no backend: everything runs on the browser UI thread.

use leptos::*;

mod app;
mod components;
mod nav;
mod pages;
mod routing;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
