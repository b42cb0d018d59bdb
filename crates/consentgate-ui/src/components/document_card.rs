//! Document Card Component
//!
//! Shows one document with its signed state and a single sign control.

use consentgate_core::DocumentKey;
use dioxus::prelude::*;

/// CSS class for the sign control in a given state
pub fn sign_button_class(signed: bool) -> &'static str {
    if signed {
        "sign-btn signed"
    } else {
        "sign-btn unsigned"
    }
}

/// Properties for the DocumentCard component
#[derive(Clone, PartialEq, Props)]
pub struct DocumentCardProps {
    /// Which document this card represents
    pub document: DocumentKey,
    /// Whether the document has been signed
    pub signed: bool,
    /// Called with the card's key when the sign control is pressed
    pub on_sign: EventHandler<DocumentKey>,
}

/// Card with title, description, and a pen button.
///
/// Pressing the button on an unsigned card reports the key to `on_sign`.
/// Once signed the press is dropped here; the gate would ignore it anyway.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     DocumentCard {
///         document: DocumentKey::Form8821,
///         signed: gate.read().signed_documents().form_8821,
///         on_sign: move |key| { gate.write().sign_document(key); }
///     }
/// }
/// ```
#[component]
pub fn DocumentCard(props: DocumentCardProps) -> Element {
    let document = props.document;
    let signed = props.signed;
    let on_sign = props.on_sign;
    let title = document.title();
    let description = document.description();

    let aria_label = if signed {
        format!("{} signed", title)
    } else {
        format!("Sign {}", title)
    };

    rsx! {
        div { class: if signed { "document-card signed" } else { "document-card" },
            div { class: "document-text",
                h4 { class: "document-title", "{title}" }
                p { class: "document-description", "{description}" }
            }
            button {
                class: sign_button_class(signed),
                r#type: "button",
                "aria-label": "{aria_label}",
                "aria-pressed": if signed { "true" } else { "false" },
                onclick: move |_| {
                    if signed {
                        tracing::trace!(%document, "Sign pressed on signed card");
                    } else {
                        on_sign.call(document);
                    }
                },
                // Pen nib while unsigned, check mark once signed
                if signed { "\u{2713}" } else { "\u{2712}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_button_classes() {
        assert_eq!(sign_button_class(false), "sign-btn unsigned");
        assert_eq!(sign_button_class(true), "sign-btn signed");
    }

    #[test]
    fn card_icons() {
        assert_eq!("\u{2712}", "✒");
        assert_eq!("\u{2713}", "✓");
    }
}
