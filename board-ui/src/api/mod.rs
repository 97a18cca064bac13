//! HTTP API
//!
//! gloo-net implementation of the activities contract.

pub mod client;

pub use client::{get_api_base, GlooActivitiesApi};

/// Log to the browser console
pub fn console_error(message: &str) {
    web_sys::console::error_1(&message.into());
}
