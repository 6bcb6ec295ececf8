//! Design Tandem Site
//!
//! The lab and retro pages of the Design Tandem mentorship site, built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - Two pages switched in place, each keeping its selections
//! - Prompt generator with a highlight pulse and scroll-to-display
//! - Filterable retrospective insights
//! - Topic explorer driven by a clickable doughnut chart
//! - Radar and bar charts drawn on HTML5 canvas
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All content and state transitions come from the `tandem`
//! library; this crate wraps them in signals, draws them and carries out the
//! effects they request.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
