// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The styleable states.

use understory_interactive::state::{ActiveKind, FocusKind};

/// A state that can carry its own class name and style.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleSlot {
    /// Any hover.
    Hover,
    /// Any active variant.
    Active,
    /// `mouseActive`.
    MouseActive,
    /// `touchActive`.
    TouchActive,
    /// `keyActive`.
    KeyActive,
    /// Any focus variant.
    Focus,
    /// `focusFromMouse`.
    FocusFromMouse,
    /// `focusFromTouch`.
    FocusFromTouch,
    /// `focusFromKey`.
    FocusFromKey,
    /// The instance is disabled.
    Disabled,
}

impl StyleSlot {
    /// Every slot, lowest precedence first (disabled sits apart and short-circuits the rest).
    pub const ALL: [Self; 10] = [
        Self::Disabled,
        Self::Hover,
        Self::Active,
        Self::MouseActive,
        Self::TouchActive,
        Self::KeyActive,
        Self::Focus,
        Self::FocusFromMouse,
        Self::FocusFromTouch,
        Self::FocusFromKey,
    ];

    /// The slot's name, which is also its default class name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hover => "hover",
            Self::Active => "active",
            Self::MouseActive => "mouseActive",
            Self::TouchActive => "touchActive",
            Self::KeyActive => "keyActive",
            Self::Focus => "focus",
            Self::FocusFromMouse => "focusFromMouse",
            Self::FocusFromTouch => "focusFromTouch",
            Self::FocusFromKey => "focusFromKey",
            Self::Disabled => "disabled",
        }
    }

    /// The modality-specific slot for an active variant.
    #[must_use]
    pub const fn for_active(kind: ActiveKind) -> Self {
        match kind {
            ActiveKind::Mouse => Self::MouseActive,
            ActiveKind::Touch => Self::TouchActive,
            ActiveKind::Key => Self::KeyActive,
        }
    }

    /// The modality-specific slot for a focus variant.
    #[must_use]
    pub const fn for_focus(kind: FocusKind) -> Self {
        match kind {
            FocusKind::Mouse => Self::FocusFromMouse,
            FocusKind::Touch => Self::FocusFromTouch,
            FocusKind::Key => Self::FocusFromKey,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Disabled => 0,
            Self::Hover => 1,
            Self::Active => 2,
            Self::MouseActive => 3,
            Self::TouchActive => 4,
            Self::KeyActive => 5,
            Self::Focus => 6,
            Self::FocusFromMouse => 7,
            Self::FocusFromTouch => 8,
            Self::FocusFromKey => 9,
        }
    }
}
