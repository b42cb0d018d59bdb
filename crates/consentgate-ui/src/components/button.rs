//! Button Components
//!
//! - Primary: ordinary actions
//! - Proceed: full-width call to action, green when enabled
//! - Ghost: secondary actions such as "back"

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    /// Full-width call to action
    Proceed,
    /// Subtle/secondary action
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Proceed => "btn-proceed",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Full class list for a button, including the disabled marker
pub fn button_class(variant: ButtonVariant, disabled: bool, extra: Option<&str>) -> String {
    let mut class = variant.class().to_string();
    if disabled {
        class.push_str(" is-disabled");
    }
    if let Some(extra) = extra.filter(|s| !s.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button.
///
/// A disabled button swallows clicks even if the host platform still
/// delivers them, so the handler only ever runs while enabled.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Proceed,
///         disabled: !can_proceed(),
///         onclick: move |_| { gate.write().proceed(); },
///         "Process Payment"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.disabled, props.class.as_deref());
    let disabled = props.disabled;

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: disabled,
            "aria-disabled": if disabled { "true" } else { "false" },
            onclick: move |_| {
                if disabled {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Proceed.class(), "btn-proceed");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn button_class_composition() {
        assert_eq!(button_class(ButtonVariant::Proceed, false, None), "btn-proceed");
        assert_eq!(
            button_class(ButtonVariant::Proceed, true, None),
            "btn-proceed is-disabled"
        );
        assert_eq!(
            button_class(ButtonVariant::Ghost, false, Some("back-btn")),
            "btn-ghost back-btn"
        );
        assert_eq!(button_class(ButtonVariant::Primary, false, Some("")), "btn-primary");
    }
}
