// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The normalized tri-axis state and the reducer that transitions it.
//!
//! ## Usage
//!
//! 1) Describe the desired changes as [`Transition`]s: an axis value plus an
//!    [`Action`] (`Enter` assigns unconditionally, `Exit` clears only a matching value).
//! 2) Call [`InteractiveState::apply`] with the whole batch.
//! 3) `None` means nothing changed and no one should be notified; `Some` carries
//!    the committed [`StateChange`].
//!
//! ## Minimal example
//!
//! ```
//! use understory_interactive::state::{ActiveKind, InteractiveState, Transition};
//!
//! let state = InteractiveState::default();
//! let change = state
//!     .apply(&[Transition::enter_hover(true), Transition::enter_active(ActiveKind::Mouse)], false)
//!     .unwrap();
//! assert!(change.state.hover);
//! assert_eq!(change.state.active, Some(ActiveKind::Mouse));
//! assert_eq!(change.prev_state, state);
//!
//! // Applying the same batch again is a no-op.
//! assert!(change.state.apply(&[Transition::enter_hover(true)], false).is_none());
//! ```

use core::fmt;

/// Which modality is pressing the element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActiveKind {
    /// Pressed by a mouse button or pen contact (`"mouseActive"`).
    Mouse,
    /// Pressed by a touch point (`"touchActive"`).
    Touch,
    /// Pressed by a held Space or Enter key (`"keyActive"`).
    Key,
}

impl ActiveKind {
    /// The conventional name of this active variant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mouse => "mouseActive",
            Self::Touch => "touchActive",
            Self::Key => "keyActive",
        }
    }
}

/// Which modality caused the element to gain focus.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FocusKind {
    /// Focus gained from a mouse press (`"focusFromMouse"`).
    Mouse,
    /// Focus gained from a touch tap (`"focusFromTouch"`).
    Touch,
    /// Focus gained from keyboard navigation (`"focusFromKey"`).
    Key,
}

impl FocusKind {
    /// The conventional name of this focus variant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mouse => "focusFromMouse",
            Self::Touch => "focusFromTouch",
            Self::Key => "focusFromKey",
        }
    }
}

/// The normalized interaction state of one element.
///
/// `hover` is independent of the other two axes. `active` and `focus` each hold
/// at most one variant; `None` is the `false` value of the axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct InteractiveState {
    /// A pointer device is over the element.
    pub hover: bool,
    /// The element is being pressed, tagged by modality.
    pub active: Option<ActiveKind>,
    /// The element holds focus, tagged by the modality that focused it.
    pub focus: Option<FocusKind>,
}

impl InteractiveState {
    /// The state at mount: every axis off.
    pub const INITIAL: Self = Self {
        hover: false,
        active: None,
        focus: None,
    };

    /// Apply a batch of transitions atomically.
    ///
    /// `drag_in_progress` blocks every `Exit` on the active axis so a native
    /// drag keeps the element pressed. Returns `None` when the resulting state
    /// equals `self` field by field.
    #[must_use]
    pub fn apply(&self, transitions: &[Transition], drag_in_progress: bool) -> Option<StateChange> {
        let mut next = *self;
        for transition in transitions {
            next.apply_one(*transition, drag_in_progress);
        }
        if next == *self {
            None
        } else {
            Some(StateChange {
                state: next,
                prev_state: *self,
            })
        }
    }

    fn apply_one(&mut self, transition: Transition, drag_in_progress: bool) {
        match (transition.action, transition.value) {
            (Action::Enter, AxisValue::Hover(v)) => self.hover = v,
            (Action::Enter, AxisValue::Active(v)) => self.active = v,
            (Action::Enter, AxisValue::Focus(v)) => self.focus = v,
            (Action::Exit, AxisValue::Hover(v)) => {
                if self.hover == v {
                    self.hover = false;
                }
            }
            (Action::Exit, AxisValue::Active(v)) => {
                if !drag_in_progress && self.active == v {
                    self.active = None;
                }
            }
            (Action::Exit, AxisValue::Focus(v)) => {
                if self.focus == v {
                    self.focus = None;
                }
            }
        }
    }
}

impl fmt::Display for InteractiveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{hover: {}, active: {}, focus: {}}}",
            self.hover,
            self.active.map_or("false", ActiveKind::as_str),
            self.focus.map_or("false", FocusKind::as_str),
        )
    }
}

/// A value on one of the three axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AxisValue {
    /// A value on the hover axis.
    Hover(bool),
    /// A value on the active axis.
    Active(Option<ActiveKind>),
    /// A value on the focus axis.
    Focus(Option<FocusKind>),
}

/// How a [`Transition`] is applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Assign the value unconditionally.
    Enter,
    /// Clear the axis, but only if it currently holds exactly the value.
    Exit,
}

/// One `(axis, value, action)` triple.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    /// Axis and value.
    pub value: AxisValue,
    /// Enter or exit.
    pub action: Action,
}

impl Transition {
    /// Unconditionally set `value`.
    #[must_use]
    pub const fn enter(value: AxisValue) -> Self {
        Self {
            value,
            action: Action::Enter,
        }
    }

    /// Clear the axis if it holds `value`.
    #[must_use]
    pub const fn exit(value: AxisValue) -> Self {
        Self {
            value,
            action: Action::Exit,
        }
    }

    /// Set hover.
    #[must_use]
    pub const fn enter_hover(hover: bool) -> Self {
        Self::enter(AxisValue::Hover(hover))
    }

    /// Clear hover if it is on.
    #[must_use]
    pub const fn exit_hover() -> Self {
        Self::exit(AxisValue::Hover(true))
    }

    /// Set the active axis to `kind`.
    #[must_use]
    pub const fn enter_active(kind: ActiveKind) -> Self {
        Self::enter(AxisValue::Active(Some(kind)))
    }

    /// Clear the active axis if it holds `kind`.
    #[must_use]
    pub const fn exit_active(kind: ActiveKind) -> Self {
        Self::exit(AxisValue::Active(Some(kind)))
    }

    /// Unconditionally clear the active axis.
    #[must_use]
    pub const fn reset_active() -> Self {
        Self::enter(AxisValue::Active(None))
    }

    /// Set the focus axis to `kind`.
    #[must_use]
    pub const fn enter_focus(kind: FocusKind) -> Self {
        Self::enter(AxisValue::Focus(Some(kind)))
    }

    /// Unconditionally clear the focus axis.
    #[must_use]
    pub const fn reset_focus() -> Self {
        Self::enter(AxisValue::Focus(None))
    }
}

/// A committed state change: the new state and the one it replaced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateChange {
    /// The state after the change.
    pub state: InteractiveState,
    /// The state before the change.
    pub prev_state: InteractiveState,
}
