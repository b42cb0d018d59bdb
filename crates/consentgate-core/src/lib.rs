//! consentgate core library
//!
//! Gating logic for a tax-resolution terms and conditions screen, kept free
//! of any UI framework so it can be driven from the desktop app, the CLI, or
//! plain tests.
//!
//! ## Overview
//!
//! A client signs three documents (service agreement, IRS Form 8821, IRS
//! Form 2848) and checks three acknowledgements. Once all six hold, the
//! proceed control opens the payment step.
//!
//! - **Agreements** toggle both ways
//! - **Documents** can only be signed, never unsigned
//! - **Proceed** is inert until every condition is met
//!
//! ## Quick Start
//!
//! ```
//! use consentgate_core::{AgreementKey, ConsentGate, DocumentKey, Screen};
//!
//! let mut gate = ConsentGate::new();
//! for key in DocumentKey::ALL {
//!     gate.sign_document(key);
//! }
//! for key in AgreementKey::ALL {
//!     gate.toggle_agreement(key);
//! }
//!
//! assert!(gate.can_proceed());
//! assert!(gate.proceed().is_advanced());
//! assert_eq!(gate.screen(), Screen::Payment);
//!
//! gate.back();
//! assert_eq!(gate.screen(), Screen::Terms);
//! assert!(gate.can_proceed());
//! ```

pub mod error;
pub mod flags;
pub mod gate;
pub mod keys;
pub mod snapshot;

// Re-exports
pub use error::{ConsentError, ConsentResult};
pub use flags::{Agreements, SignedDocuments};
pub use gate::{ConsentGate, GateReport, GateState, Screen, Transition, REQUIREMENT_COUNT};
pub use keys::{AgreementKey, DocumentKey, Requirement};
pub use snapshot::ConsentSnapshot;
