//! Agreement Checkbox Component

use consentgate_core::AgreementKey;
use dioxus::prelude::*;

/// Properties for the AgreementCheckbox component
#[derive(Clone, PartialEq, Props)]
pub struct AgreementCheckboxProps {
    /// Which statement this box acknowledges
    pub agreement: AgreementKey,
    /// Current value of the flag
    pub checked: bool,
    /// Called with the key on every change
    pub on_toggle: EventHandler<AgreementKey>,
}

/// Labelled checkbox bound to one agreement flag
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     AgreementCheckbox {
///         agreement: AgreementKey::RetainerCredit,
///         checked: gate.read().agreements().retainer_credit,
///         on_toggle: move |key| { gate.write().toggle_agreement(key); }
///     }
/// }
/// ```
#[component]
pub fn AgreementCheckbox(props: AgreementCheckboxProps) -> Element {
    let agreement = props.agreement;
    let on_toggle = props.on_toggle;
    let id = format!("agreement-{}", agreement.as_str());
    let statement = agreement.statement();

    rsx! {
        label {
            class: if props.checked { "agreement-row checked" } else { "agreement-row" },
            r#for: "{id}",
            input {
                id: "{id}",
                class: "agreement-checkbox",
                r#type: "checkbox",
                checked: props.checked,
                onchange: move |_| on_toggle.call(agreement),
            }
            span { class: "agreement-statement", "{statement}" }
        }
    }
}

/// Section wrapper with the instruction heading
#[component]
pub fn AgreementList(children: Element) -> Element {
    rsx! {
        section { class: "agreement-list",
            h3 { class: "section-header", "Please check the following boxes" }
            div { class: "agreement-rows", {children} }
        }
    }
}
