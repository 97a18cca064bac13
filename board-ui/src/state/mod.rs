//! State Management
//!
//! Signal-backed board surface shared by all components.

pub mod global;

pub use global::{provide_global_state, GlobalState, SharedBoard};
