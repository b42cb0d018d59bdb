//! Terms and conditions page.
//!
//! Three documents to sign, three boxes to check, and a payment button that
//! stays inert until all six are done.

use consentgate_core::{AgreementKey, DocumentKey, Transition};
use consentgate_ui::{
    AgreementCheckbox, AgreementList, Button, ButtonVariant, DocumentCard, GateStatus,
};
use dioxus::prelude::*;

use crate::context::use_gate;

#[component]
pub fn TermsPage() -> Element {
    let mut gate = use_gate();

    // Derived from the gate on change, never stored separately
    let can_proceed = use_memo(move || gate.read().can_proceed());
    let status = use_memo(move || {
        let g = gate.read();
        let next = g
            .missing()
            .first()
            .map(|r| r.label().to_string())
            .unwrap_or_default();
        (g.state(), g.progress(), next)
    });

    let agreements = *gate.read().agreements();
    let documents = *gate.read().signed_documents();
    let (state, (satisfied, total), next) = status();

    let proceed = move |_: ()| {
        if let Transition::Blocked { missing } = gate.write().proceed() {
            tracing::debug!(missing = missing.len(), "Process Payment pressed while inert");
        }
    };

    rsx! {
        main { class: "terms-page",
            div { class: "terms-panel",
                header { class: "terms-header",
                    div { class: "header-icon", "\u{1F4C4}" }
                    div {
                        h2 { class: "page-title", "TERMS & CONDITIONS" }
                        p { class: "page-subtitle", "Please Read and Sign the following" }
                    }
                }

                section { class: "document-list",
                    for key in DocumentKey::ALL {
                        DocumentCard {
                            key: "{key}",
                            document: key,
                            signed: documents.get(key),
                            on_sign: move |key: DocumentKey| {
                                gate.write().sign_document(key);
                            },
                        }
                    }
                }

                AgreementList {
                    for key in AgreementKey::ALL {
                        AgreementCheckbox {
                            key: "{key}",
                            agreement: key,
                            checked: agreements.get(key),
                            on_toggle: move |key: AgreementKey| {
                                gate.write().toggle_agreement(key);
                            },
                        }
                    }
                }

                GateStatus {
                    state: state,
                    satisfied: satisfied,
                    total: total,
                    next: next,
                }

                Button {
                    variant: ButtonVariant::Proceed,
                    disabled: !can_proceed(),
                    onclick: proceed,
                    span { "Process Payment" }
                    span { class: "btn-icon", "\u{1F4B3}" }
                }
            }
        }
    }
}
