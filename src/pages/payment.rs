//! Payment step.
//!
//! Stands in for the external payment collaborator. It only receives the
//! consent snapshot and a way back; card capture happens elsewhere.

use consentgate_core::ConsentSnapshot;
use consentgate_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

/// Properties for the PaymentPage component
#[derive(Clone, PartialEq, Props)]
pub struct PaymentPageProps {
    /// Consent recorded when the gate opened
    pub snapshot: ConsentSnapshot,
    /// Return to the terms screen with flags intact
    pub on_back: EventHandler<()>,
}

#[component]
pub fn PaymentPage(props: PaymentPageProps) -> Element {
    let snapshot = props.snapshot;
    let on_back = props.on_back;
    let accepted_at = snapshot.accepted_at.format("%b %e, %Y %H:%M UTC").to_string();
    let consent_id = snapshot.id.to_string();

    let signed: Vec<&'static str> = snapshot
        .signed_documents
        .iter()
        .filter(|(_, signed)| *signed)
        .map(|(key, _)| key.title())
        .collect();
    let acknowledged: Vec<&'static str> = snapshot
        .agreements
        .iter()
        .filter(|(_, checked)| *checked)
        .map(|(key, _)| key.statement())
        .collect();

    rsx! {
        main { class: "terms-page",
            div { class: "terms-panel",
                header { class: "terms-header",
                    div { class: "header-icon", "\u{1F4B3}" }
                    div {
                        h2 { class: "page-title", "PAYMENT" }
                        p { class: "page-subtitle", "Retainer payment" }
                    }
                }

                section { class: "consent-summary",
                    h3 { class: "section-header", "Signed documents" }
                    ul {
                        for title in signed {
                            li { class: "summary-item", "\u{2713} {title}" }
                        }
                    }
                    h3 { class: "section-header", "Acknowledged" }
                    ul {
                        for statement in acknowledged {
                            li { class: "summary-item", "\u{2713} {statement}" }
                        }
                    }
                    p { class: "summary-meta", "Accepted {accepted_at}" }
                    p { class: "summary-meta", "Reference {consent_id}" }
                }

                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_back.call(()),
                    "\u{2190} Back to terms"
                }
            }
        }
    }
}
