// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Projecting interaction state onto a class name and an inline style.
//!
//! Styles are layered lowest precedence first:
//!
//! 1. the caller's base style;
//! 2. computed defaults (`cursor: pointer` for clickable elements, selection
//!    and callout suppression during extended touch-active);
//! 3. the `disabled` style, which ends the chain when disabled;
//! 4. `hover`, then `active`, then the active variant;
//! 5. `focus`, then the focus variant.
//!
//! Class names follow the same order. [`project`] is pure: the same inputs
//! always produce the same output.

use understory_interactive::state::InteractiveState;

use crate::class_list::ClassList;
use crate::slot::StyleSlot;
use crate::state_styles::StateStyles;
use crate::style_map::StyleMap;

/// Everything besides the style table that the projection depends on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectionInput<'a> {
    /// The current interaction state.
    pub state: InteractiveState,
    /// The instance is disabled.
    pub disabled: bool,
    /// The element has click behaviour (a click handler, a tap handler or a link).
    pub clickable: bool,
    /// The instance is held in `touchActive` under extended mode.
    pub in_extended_touch_active: bool,
    /// The caller's own class names.
    pub class_name: Option<&'a str>,
    /// The caller's base style.
    pub style: Option<&'a StyleMap>,
}

/// The merged result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Projection {
    /// Class names to render.
    pub class_name: ClassList,
    /// Inline style to render.
    pub style: StyleMap,
    /// `Some(false)` when native dragging must be turned off.
    pub draggable: Option<bool>,
}

/// Project `input` through `styles`.
///
/// ```rust
/// use understory_interactive::state::{ActiveKind, InteractiveState};
/// use understory_interactive_style::{ProjectionInput, StateStyles, project};
///
/// let input = ProjectionInput {
///     state: InteractiveState { hover: true, active: Some(ActiveKind::Mouse), focus: None },
///     clickable: true,
///     class_name: Some("button"),
///     ..ProjectionInput::default()
/// };
/// let out = project(&StateStyles::default(), &input);
/// assert_eq!(out.class_name.to_string(), "button hover active mouseActive");
/// assert_eq!(out.style.get("cursor"), Some("pointer"));
/// ```
#[must_use]
pub fn project(styles: &StateStyles, input: &ProjectionInput<'_>) -> Projection {
    let mut out = Projection::default();
    if let Some(class_name) = input.class_name {
        out.class_name.push(class_name);
    }
    if let Some(style) = input.style {
        out.style.merge(style);
    }

    if input.disabled {
        apply(styles, StyleSlot::Disabled, &mut out);
        return out;
    }

    if input.clickable {
        out.style.set("cursor", "pointer");
    }
    if input.in_extended_touch_active {
        out.style.set("user-select", "none");
        out.style.set("-webkit-user-select", "none");
        out.style.set("-webkit-touch-callout", "none");
        out.draggable = Some(false);
    }

    let state = input.state;
    if state.hover {
        apply(styles, StyleSlot::Hover, &mut out);
    }
    if let Some(kind) = state.active {
        apply(styles, StyleSlot::Active, &mut out);
        apply(styles, StyleSlot::for_active(kind), &mut out);
    }
    if let Some(kind) = state.focus {
        apply(styles, StyleSlot::Focus, &mut out);
        apply(styles, StyleSlot::for_focus(kind), &mut out);
    }
    out
}

fn apply(styles: &StateStyles, slot: StyleSlot, out: &mut Projection) {
    out.class_name.push(styles.class_name(slot));
    if let Some(style) = styles.style(slot) {
        out.style.merge(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_styles::StateStylesBuilder;
    use alloc::string::ToString;
    use understory_interactive::state::{ActiveKind, FocusKind};

    fn table() -> StateStyles {
        StateStylesBuilder::new()
            .style(StyleSlot::Hover, StyleMap::new().with("color", "blue"))
            .style(StyleSlot::Active, StyleMap::new().with("color", "red"))
            .style(StyleSlot::TouchActive, StyleMap::new().with("color", "green"))
            .style(StyleSlot::Focus, StyleMap::new().with("outline", "1px"))
            .style(StyleSlot::FocusFromKey, StyleMap::new().with("outline", "3px"))
            .style(StyleSlot::Disabled, StyleMap::new().with("opacity", "0.5"))
            .build()
            .unwrap()
    }

    #[test]
    fn later_slots_win() {
        let input = ProjectionInput {
            state: InteractiveState {
                hover: true,
                active: Some(ActiveKind::Touch),
                focus: Some(FocusKind::Key),
            },
            ..ProjectionInput::default()
        };
        let out = project(&table(), &input);
        assert_eq!(out.style.get("color"), Some("green"));
        assert_eq!(out.style.get("outline"), Some("3px"));
        assert_eq!(
            out.class_name.to_string(),
            "hover active touchActive focus focusFromKey"
        );
    }

    #[test]
    fn disabled_short_circuits_interaction_styles() {
        let base = StyleMap::new().with("color", "black");
        let input = ProjectionInput {
            state: InteractiveState {
                hover: true,
                active: Some(ActiveKind::Mouse),
                focus: Some(FocusKind::Mouse),
            },
            disabled: true,
            clickable: true,
            style: Some(&base),
            ..ProjectionInput::default()
        };
        let out = project(&table(), &input);
        assert_eq!(out.class_name.to_string(), "disabled");
        assert_eq!(out.style.to_string(), "color: black; opacity: 0.5");
    }

    #[test]
    fn defaults_override_base_style() {
        let base = StyleMap::new().with("cursor", "default").with("margin", "0");
        let input = ProjectionInput {
            clickable: true,
            style: Some(&base),
            ..ProjectionInput::default()
        };
        let out = project(&StateStyles::default(), &input);
        assert_eq!(out.style.to_string(), "cursor: pointer; margin: 0");
        assert_eq!(out.draggable, None);
    }

    #[test]
    fn extended_touch_active_disables_selection_and_drag() {
        let input = ProjectionInput {
            state: InteractiveState {
                active: Some(ActiveKind::Touch),
                ..InteractiveState::INITIAL
            },
            in_extended_touch_active: true,
            ..ProjectionInput::default()
        };
        let out = project(&StateStyles::default(), &input);
        assert_eq!(out.style.get("user-select"), Some("none"));
        assert_eq!(out.style.get("-webkit-touch-callout"), Some("none"));
        assert_eq!(out.draggable, Some(false));
    }

    #[test]
    fn unconfigured_slots_only_add_classes() {
        let input = ProjectionInput {
            state: InteractiveState {
                hover: true,
                ..InteractiveState::INITIAL
            },
            ..ProjectionInput::default()
        };
        let out = project(&StateStyles::default(), &input);
        assert!(out.style.is_empty());
        assert_eq!(out.class_name.to_string(), "hover");
    }
}
