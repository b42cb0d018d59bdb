//! Gating state machine
//!
//! [`ConsentGate`] is the single state record behind the terms screen. It
//! owns both flag maps and the navigation flag, and exposes the transitions
//! the view calls on user input:
//!
//! ```text
//!                toggle / sign                         proceed()
//!   Incomplete ─────────────────▶ ReadyToProceed ───────────────▶ PaymentView
//!       ▲  ◀───────────────────────────  │                             │
//!       │        untoggle agreement      │                             │
//!       └────────────────────────────────┴──────────── back() ◀────────┘
//! ```
//!
//! Derived conditions (`all_checked`, `all_signed`, `can_proceed`) are
//! computed from the flags on every call and never stored.

use serde::{Deserialize, Serialize};

use crate::flags::{Agreements, SignedDocuments};
use crate::keys::{AgreementKey, DocumentKey, Requirement};
use crate::snapshot::ConsentSnapshot;

/// Total number of conditions guarding the payment step
pub const REQUIREMENT_COUNT: usize = AgreementKey::ALL.len() + DocumentKey::ALL.len();

/// Which screen the host should render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Screen {
    /// The terms and conditions form
    #[default]
    Terms,
    /// The external payment step
    Payment,
}

/// Observable state of the gate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GateState {
    /// At least one condition is unmet
    #[default]
    Incomplete,
    /// Every condition is met; proceed is enabled
    ReadyToProceed,
    /// Control has been handed to the payment step
    PaymentView,
}

impl GateState {
    /// Returns the display label for this state
    pub fn label(&self) -> &'static str {
        match self {
            GateState::Incomplete => "incomplete",
            GateState::ReadyToProceed => "ready to proceed",
            GateState::PaymentView => "payment",
        }
    }
}

/// Outcome of a proceed activation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The gate opened and the payment step now owns the screen
    Advanced(ConsentSnapshot),
    /// Proceed was inert; nothing changed
    Blocked { missing: Vec<Requirement> },
    /// Already on the payment step; nothing changed
    AlreadyInPayment,
}

impl Transition {
    pub fn is_advanced(&self) -> bool {
        matches!(self, Transition::Advanced(_))
    }
}

/// State record for the terms screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsentGate {
    agreements: Agreements,
    signed_documents: SignedDocuments,
    /// Present exactly while the payment step is showing
    payment: Option<ConsentSnapshot>,
}

impl ConsentGate {
    /// Fresh gate: nothing signed, nothing checked, on the terms screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip an agreement checkbox. Returns the new value.
    pub fn toggle_agreement(&mut self, key: AgreementKey) -> bool {
        let checked = self.agreements.toggle(key);
        tracing::debug!(agreement = %key, checked, "Toggled agreement");
        checked
    }

    /// Sign a document. Returns true if this call signed it, false if it was
    /// already signed. There is no way to unsign.
    pub fn sign_document(&mut self, key: DocumentKey) -> bool {
        let changed = self.signed_documents.sign(key);
        if changed {
            tracing::debug!(document = %key, "Signed document");
        } else {
            tracing::trace!(document = %key, "Document already signed");
        }
        changed
    }

    /// Activate the proceed control.
    ///
    /// Opens the payment step only from the terms screen with every
    /// condition met. Any other call leaves the gate untouched.
    pub fn proceed(&mut self) -> Transition {
        if self.payment.is_some() {
            tracing::debug!("Proceed ignored: payment step already showing");
            return Transition::AlreadyInPayment;
        }
        if !self.can_proceed() {
            let missing = self.missing();
            tracing::debug!(missing = missing.len(), "Proceed blocked");
            return Transition::Blocked { missing };
        }

        let snapshot = ConsentSnapshot::capture(self.agreements, self.signed_documents);
        tracing::info!(consent_id = %snapshot.id, "Terms accepted, moving to payment");
        self.payment = Some(snapshot.clone());
        Transition::Advanced(snapshot)
    }

    /// Return from the payment step. Flags are kept as they were.
    pub fn back(&mut self) {
        if let Some(snapshot) = self.payment.take() {
            tracing::info!(consent_id = %snapshot.id, "Returned from payment to terms");
        }
    }

    pub fn agreements(&self) -> &Agreements {
        &self.agreements
    }

    pub fn signed_documents(&self) -> &SignedDocuments {
        &self.signed_documents
    }

    /// Snapshot held by the payment step, if it is showing
    pub fn payment_snapshot(&self) -> Option<&ConsentSnapshot> {
        self.payment.as_ref()
    }

    pub fn screen(&self) -> Screen {
        if self.payment.is_some() {
            Screen::Payment
        } else {
            Screen::Terms
        }
    }

    pub fn all_checked(&self) -> bool {
        self.agreements.all()
    }

    pub fn all_signed(&self) -> bool {
        self.signed_documents.all()
    }

    /// The proceed gate: every agreement checked and every document signed
    pub fn can_proceed(&self) -> bool {
        self.all_checked() && self.all_signed()
    }

    pub fn state(&self) -> GateState {
        if self.payment.is_some() {
            GateState::PaymentView
        } else if self.can_proceed() {
            GateState::ReadyToProceed
        } else {
            GateState::Incomplete
        }
    }

    /// Whether a single requirement is satisfied
    pub fn is_satisfied(&self, requirement: Requirement) -> bool {
        match requirement {
            Requirement::Document(key) => self.signed_documents.get(key),
            Requirement::Agreement(key) => self.agreements.get(key),
        }
    }

    /// Unmet requirements, documents first
    pub fn missing(&self) -> Vec<Requirement> {
        Requirement::all()
            .filter(|r| !self.is_satisfied(*r))
            .collect()
    }

    /// Satisfied count and total
    pub fn progress(&self) -> (usize, usize) {
        let done = Requirement::all().filter(|r| self.is_satisfied(*r)).count();
        (done, REQUIREMENT_COUNT)
    }

    /// Serializable summary of the current state
    pub fn report(&self) -> GateReport {
        let (satisfied, total) = self.progress();
        GateReport {
            state: self.state(),
            screen: self.screen(),
            agreements: self.agreements,
            signed_documents: self.signed_documents,
            satisfied,
            total,
            missing: self.missing(),
            snapshot: self.payment.clone(),
        }
    }
}

/// Point-in-time view of a gate, suitable for printing or JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GateReport {
    pub state: GateState,
    pub screen: Screen,
    pub agreements: Agreements,
    pub signed_documents: SignedDocuments,
    pub satisfied: usize,
    pub total: usize,
    pub missing: Vec<Requirement>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub snapshot: Option<ConsentSnapshot>,
}
