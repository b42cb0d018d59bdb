use consentgate_core::ConsentGate;
use dioxus::prelude::*;

use crate::pages::{PaymentPage, TermsPage};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the gate signal and swaps between the terms form and the payment
/// step based on the gate's navigation flag.
#[component]
pub fn App() -> Element {
    let mut gate: Signal<ConsentGate> = use_signal(ConsentGate::new);
    use_context_provider(|| gate);

    let snapshot = gate.read().payment_snapshot().cloned();
    let page = match snapshot {
        Some(snapshot) => rsx! {
            PaymentPage {
                snapshot: snapshot,
                on_back: move |_| gate.write().back(),
            }
        },
        None => rsx! { TermsPage {} },
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        {page}
    }
}
