//! Gate Status Indicator Component
//!
//! One-line progress readout under the requirements, e.g.
//! "4 of 6 complete" with a dot that turns green once ready.

use consentgate_core::GateState;
use dioxus::prelude::*;

/// Text shown for a given progress count
pub fn progress_label(satisfied: usize, total: usize) -> String {
    if satisfied >= total {
        "all conditions met".to_string()
    } else {
        format!("{} of {} complete", satisfied, total)
    }
}

/// Dot class for a gate state
pub fn status_dot_class(state: GateState) -> &'static str {
    match state {
        GateState::Incomplete => "status-dot",
        GateState::ReadyToProceed | GateState::PaymentView => "status-dot ready",
    }
}

/// Properties for the GateStatus component
#[derive(Clone, PartialEq, Props)]
pub struct GateStatusProps {
    pub state: GateState,
    pub satisfied: usize,
    pub total: usize,
    /// Label of the next unmet requirement, empty once ready
    #[props(default)]
    pub next: String,
}

#[component]
pub fn GateStatus(props: GateStatusProps) -> Element {
    let label = progress_label(props.satisfied, props.total);
    let next = props.next;

    rsx! {
        div { class: "gate-status", role: "status",
            span {
                class: status_dot_class(props.state),
                "aria-hidden": "true",
            }
            span { class: "status-label", "{label}" }
            if !next.is_empty() {
                span { class: "status-next", "next: {next}" }
            }
        }
    }
}
