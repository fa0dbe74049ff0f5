// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render target capability the engine depends on.
//!
//! The engine never renders anything itself. It only needs to know what kind of
//! element it is wrapping (to decide which keys trigger it and whether it
//! supports a native `disabled` attribute) and to be able to move focus
//! imperatively. Implement [`Element`] for each concrete renderable kind.
//!
//! ## Re-entrancy
//!
//! On a real platform, calling [`Element::focus`] or [`Element::blur`]
//! synchronously dispatches a `focus`/`blur` event. Those events must be
//! queued by the host and delivered to the engine after the current call
//! returns; the engine records the provenance of the focus change it asked for
//! and attributes the resulting event accordingly.

use alloc::string::String;

/// The `type` attribute of an `<input>`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InputType {
    /// `button`.
    Button,
    /// `submit`.
    Submit,
    /// `reset`.
    Reset,
    /// `image`.
    Image,
    /// `checkbox`.
    Checkbox,
    /// `radio`.
    Radio,
    /// `file`.
    File,
    /// `color`.
    Color,
    /// Any text-like type (`text`, `email`, `number`, ...).
    Text,
}

impl InputType {
    /// Parse an `<input type>` attribute. Unknown and missing types are text-like.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::Text;
        };
        match value.trim().to_ascii_lowercase().as_str() {
            "button" => Self::Button,
            "submit" => Self::Submit,
            "reset" => Self::Reset,
            "image" => Self::Image,
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            "file" => Self::File,
            "color" => Self::Color,
            _ => Self::Text,
        }
    }

    const fn is_button_like(self) -> bool {
        matches!(self, Self::Button | Self::Submit | Self::Reset | Self::Image)
    }
}

/// What kind of element an interactive instance wraps.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `<button>`.
    Button,
    /// `<a>`; only links with an `href` are activated by Enter.
    Anchor {
        /// The link has an `href`.
        has_href: bool,
    },
    /// `<input>`.
    Input(InputType),
    /// `<select>`.
    Select,
    /// `<textarea>`.
    TextArea,
    /// `<summary>`.
    Summary,
    /// `<fieldset>`, `<optgroup>` or `<option>`: support `disabled` but take no keys.
    FormGroup,
    /// Any other element or component, by tag name.
    Other(String),
}

impl ElementKind {
    /// Classify an element from its tag name and (for inputs) `type` attribute.
    #[must_use]
    pub fn from_tag(tag: &str, input_type: Option<&str>, has_href: bool) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "button" => Self::Button,
            "a" => Self::Anchor { has_href },
            "input" => Self::Input(InputType::parse(input_type)),
            "select" => Self::Select,
            "textarea" => Self::TextArea,
            "summary" => Self::Summary,
            "fieldset" | "optgroup" | "option" => Self::FormGroup,
            other => Self::Other(String::from(other)),
        }
    }

    /// The element natively supports the `disabled` attribute.
    #[must_use]
    pub fn supports_disabled(&self) -> bool {
        matches!(
            self,
            Self::Button | Self::Input(_) | Self::Select | Self::TextArea | Self::FormGroup
        )
    }

    /// Holding Enter conventionally activates this element.
    #[must_use]
    pub fn triggered_by_enter(&self) -> bool {
        match self {
            Self::Button | Self::Summary | Self::Other(_) => true,
            Self::Anchor { has_href } => *has_href,
            Self::Input(ty) => ty.is_button_like(),
            Self::Select | Self::TextArea | Self::FormGroup => false,
        }
    }

    /// Holding Space conventionally activates this element.
    #[must_use]
    pub fn triggered_by_space(&self) -> bool {
        match self {
            Self::Button | Self::Select | Self::Summary => true,
            Self::Input(ty) => {
                ty.is_button_like()
                    || matches!(
                        ty,
                        InputType::Checkbox | InputType::Radio | InputType::File | InputType::Color
                    )
            }
            Self::Anchor { .. } | Self::TextArea | Self::FormGroup | Self::Other(_) => false,
        }
    }
}

/// A rendered element the engine can query and focus.
pub trait Element {
    /// What kind of element this is.
    fn kind(&self) -> ElementKind;

    /// The element can receive focus (natively or through a tab index).
    fn is_focusable(&self) -> bool {
        true
    }

    /// Move focus to the element.
    ///
    /// The resulting platform `focus` event must be delivered after this returns.
    /// Returns `false` when the element exposes no imperative focus.
    fn focus(&mut self) -> bool {
        false
    }

    /// Remove focus from the element.
    ///
    /// Returns `false` when the element exposes no imperative blur; the engine
    /// then relies on its synthetic transition alone.
    fn blur(&mut self) -> bool {
        false
    }
}

/// An [`Element`] that only carries its kind, for hosts without imperative focus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticElement(pub ElementKind);

impl Element for StaticElement {
    fn kind(&self) -> ElementKind {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_case_insensitive() {
        assert_eq!(ElementKind::from_tag("BUTTON", None, false), ElementKind::Button);
        assert_eq!(
            ElementKind::from_tag("Input", Some("CheckBox"), false),
            ElementKind::Input(InputType::Checkbox)
        );
        assert_eq!(
            ElementKind::from_tag("DIV", None, false),
            ElementKind::Other(String::from("div"))
        );
    }

    #[test]
    fn missing_or_unknown_input_type_is_text() {
        assert_eq!(InputType::parse(None), InputType::Text);
        assert_eq!(InputType::parse(Some("email")), InputType::Text);
        assert_eq!(InputType::parse(Some(" submit ")), InputType::Submit);
    }

    #[test]
    fn select_is_not_triggered_by_enter() {
        let select = ElementKind::Select;
        assert!(!select.triggered_by_enter());
        assert!(select.triggered_by_space());
    }

    #[test]
    fn checkable_inputs_take_space_only() {
        for ty in [InputType::Checkbox, InputType::Radio] {
            let kind = ElementKind::Input(ty);
            assert!(kind.triggered_by_space());
            assert!(!kind.triggered_by_enter());
        }
    }

    #[test]
    fn submit_takes_both_keys() {
        let kind = ElementKind::Input(InputType::Submit);
        assert!(kind.triggered_by_space());
        assert!(kind.triggered_by_enter());
    }

    #[test]
    fn links_need_href_for_enter() {
        assert!(ElementKind::Anchor { has_href: true }.triggered_by_enter());
        assert!(!ElementKind::Anchor { has_href: false }.triggered_by_enter());
        assert!(!ElementKind::Anchor { has_href: true }.triggered_by_space());
    }

    #[test]
    fn text_inputs_take_neither_key() {
        let kind = ElementKind::Input(InputType::Text);
        assert!(!kind.triggered_by_enter());
        assert!(!kind.triggered_by_space());
        assert!(!ElementKind::TextArea.triggered_by_enter());
    }

    #[test]
    fn disabled_support_follows_native_elements() {
        assert!(ElementKind::Button.supports_disabled());
        assert!(ElementKind::Input(InputType::Text).supports_disabled());
        assert!(ElementKind::FormGroup.supports_disabled());
        assert!(!ElementKind::Anchor { has_href: true }.supports_disabled());
        assert!(!ElementKind::Other(String::from("div")).supports_disabled());
    }

    #[test]
    fn static_element_has_no_imperative_focus() {
        let mut el = StaticElement(ElementKind::Button);
        assert!(!el.focus());
        assert!(!el.blur());
        assert!(el.is_focusable());
        assert_eq!(el.kind(), ElementKind::Button);
    }
}
