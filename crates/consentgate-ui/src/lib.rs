//! consentgate UI Components
//!
//! Dioxus components for the terms and conditions screen. Components take
//! plain values and callbacks; the page that mounts them owns the
//! [`consentgate_core::ConsentGate`] signal.
//!
//! ## Visual language
//!
//! - **Blue**: actions still waiting on the client (unsigned documents)
//! - **Green**: completed conditions and the enabled proceed control
//! - **Gray**: inert controls

pub mod components;

pub use components::*;
