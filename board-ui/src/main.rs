//! Activity Board
//!
//! Browser front end for the activities API, built with Leptos (WASM).
//!
//! # Features
//!
//! - Activity cards with capacity and participant rosters
//! - Signup form with client-side validation
//! - Participant removal with confirmation
//! - Transient status messages
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All board logic lives in the `activity-board` core crate; this
//! crate supplies the gloo-net HTTP client and a signal-backed surface the
//! core renders into.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
