//! Edge case and boundary condition tests
//!
//! Repeated activations, out-of-order navigation, and flag changes made
//! while the payment step is showing.

use consentgate_core::{
    AgreementKey, ConsentGate, ConsentSnapshot, DocumentKey, GateReport, GateState, Requirement,
    Screen, Transition,
};

fn ready_gate() -> ConsentGate {
    let mut gate = ConsentGate::new();
    for key in DocumentKey::ALL {
        gate.sign_document(key);
    }
    for key in AgreementKey::ALL {
        gate.toggle_agreement(key);
    }
    gate
}

// ============================================================================
// Repeated Activation Tests
// ============================================================================

/// Hammering a signed card must not corrupt anything
#[test]
fn test_repeated_sign_clicks() {
    let mut gate = ConsentGate::new();
    assert!(gate.sign_document(DocumentKey::Form2848));
    for _ in 0..10 {
        assert!(!gate.sign_document(DocumentKey::Form2848));
    }
    assert_eq!(gate.progress(), (1, 6));
    assert!(gate.signed_documents().form_2848);
}

/// Repeated blocked proceed clicks never navigate
#[test]
fn test_repeated_blocked_proceed() {
    let mut gate = ConsentGate::new();
    gate.sign_document(DocumentKey::ServiceAgreement);
    for _ in 0..5 {
        assert!(!gate.proceed().is_advanced());
        assert_eq!(gate.screen(), Screen::Terms);
    }
}

/// Each proceed/back cycle produces a fresh snapshot
#[test]
fn test_proceed_back_cycles() {
    let mut gate = ready_gate();
    let mut ids = Vec::new();

    for _ in 0..3 {
        match gate.proceed() {
            Transition::Advanced(snapshot) => ids.push(snapshot.id),
            other => panic!("expected advance, got {:?}", other),
        }
        gate.back();
    }

    ids.dedup();
    assert_eq!(ids.len(), 3);
    assert_eq!(gate.state(), GateState::ReadyToProceed);
}

// ============================================================================
// Payment Step Tests
// ============================================================================

/// Back twice is the same as back once
#[test]
fn test_double_back() {
    let mut gate = ready_gate();
    gate.proceed();
    gate.back();
    let after_one = gate.clone();
    gate.back();
    assert_eq!(gate, after_one);
}

/// Flags changed behind the payment step carry back, the snapshot does not change
#[test]
fn test_flag_change_while_in_payment() {
    let mut gate = ready_gate();
    let snapshot = match gate.proceed() {
        Transition::Advanced(snapshot) => snapshot,
        other => panic!("expected advance, got {:?}", other),
    };

    gate.toggle_agreement(AgreementKey::NoDirectPayments);
    assert_eq!(gate.state(), GateState::PaymentView);
    assert_eq!(gate.payment_snapshot(), Some(&snapshot));
    assert!(snapshot.agreements.no_direct_payments);

    gate.back();
    assert_eq!(gate.state(), GateState::Incomplete);
    assert_eq!(
        gate.missing(),
        vec![Requirement::Agreement(AgreementKey::NoDirectPayments)]
    );
}

/// The snapshot handed to the payment step records full consent
#[test]
fn test_snapshot_json_roundtrip_through_report() {
    let mut gate = ready_gate();
    gate.proceed();

    let report = gate.report();
    assert_eq!(report.screen, Screen::Payment);
    assert!(report.missing.is_empty());

    let json = serde_json::to_string(&report).unwrap();
    let parsed: GateReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);

    let snapshot: &ConsentSnapshot = parsed.snapshot.as_ref().unwrap();
    assert!(snapshot.is_complete());
}

// ============================================================================
// Ordering Tests
// ============================================================================

/// Order of actions does not matter for the final gate
#[test]
fn test_agreements_before_documents() {
    let mut gate = ConsentGate::new();
    for key in AgreementKey::ALL {
        gate.toggle_agreement(key);
    }
    assert_eq!(gate.state(), GateState::Incomplete);
    assert!(gate.all_checked());

    for key in DocumentKey::ALL.into_iter().rev() {
        gate.sign_document(key);
    }
    assert_eq!(gate, ready_gate());
}
