// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Held-key tracking for the synthetic `keyActive` condition.

use ui_events::keyboard::{Key, KeyState, NamedKey};

use crate::element::ElementKind;

bitflags::bitflags! {
    /// Activation keys currently held down on the element.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeysDown: u8 {
        /// The space bar.
        const SPACE = 0b0000_0001;
        /// The Enter key.
        const ENTER = 0b0000_0010;
    }
}

impl KeysDown {
    /// The activation flag for `key`, if it is one of the tracked keys.
    #[must_use]
    pub fn for_key(key: &Key) -> Option<Self> {
        match key {
            Key::Named(NamedKey::Enter) => Some(Self::ENTER),
            Key::Character(c) if c == " " => Some(Self::SPACE),
            _ => None,
        }
    }
}

/// Tracks which activation keys are held.
///
/// Flags must be reset on blur: a blurred element never sees the key-up for a
/// key pressed while it had focus.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyTracker {
    down: KeysDown,
}

impl KeyTracker {
    /// Create a tracker with no keys held.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            down: KeysDown::empty(),
        }
    }

    /// Keys currently held.
    #[must_use]
    pub const fn down(&self) -> KeysDown {
        self.down
    }

    /// Record a key event. Returns `false` for keys that are not tracked.
    pub fn update(&mut self, state: &KeyState, key: &Key) -> bool {
        let Some(flag) = KeysDown::for_key(key) else {
            return false;
        };
        self.down.set(flag, *state == KeyState::Down);
        true
    }

    /// Whether the held keys activate an element of `kind`.
    #[must_use]
    pub fn is_key_active(&self, kind: &ElementKind) -> bool {
        (self.down.contains(KeysDown::SPACE) && kind.triggered_by_space())
            || (self.down.contains(KeysDown::ENTER) && kind.triggered_by_enter())
    }

    /// Release every key.
    pub fn reset(&mut self) {
        self.down = KeysDown::empty();
    }
}
