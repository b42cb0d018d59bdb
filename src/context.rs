//! Gate context for the desktop app.
//!
//! The [`ConsentGate`] lives in one signal created by `App`; pages read and
//! write it through [`use_gate`].

use consentgate_core::ConsentGate;
use dioxus::prelude::*;

/// Hook to access the gate signal from context.
///
/// # Example
///
/// ```ignore
/// let mut gate = use_gate();
/// gate.write().sign_document(DocumentKey::Form8821);
/// let ready = gate.read().can_proceed();
/// ```
pub fn use_gate() -> Signal<ConsentGate> {
    use_context::<Signal<ConsentGate>>()
}
