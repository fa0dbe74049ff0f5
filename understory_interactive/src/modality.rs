// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input classification: which device produced an event.
//!
//! Browsers blur the line between devices. A touch tap is followed by
//! compatibility mouse events, focus and drag events carry no device at all,
//! and hybrid devices interleave both streams. [`event_from`] answers the
//! question using the event itself where it can (pointer type, event family)
//! and a document-wide [`RecentInput`] record where it cannot.
//!
//! ## Usage
//!
//! 1) At document level, call [`RecentInput::record`] for every event before it
//!    is dispatched to elements.
//! 2) Classify with [`event_from`] wherever the device matters.
//!
//! ```
//! use understory_interactive::event::{InputEvent, MouseKind, TouchPhase};
//! use understory_interactive::modality::{InputModality, RecentInput, event_from};
//!
//! let mut recent = RecentInput::default();
//!
//! let touch_end = InputEvent::touch(TouchPhase::End, [], 0, 0, 1_000);
//! recent.record(&touch_end);
//!
//! // The compatibility mousedown a browser fires right after the tap.
//! let ghost = InputEvent::mouse(MouseKind::Down, 1_050);
//! recent.record(&ghost);
//! assert_eq!(event_from(&ghost, &recent), InputModality::Touch);
//!
//! // A real mouse press well after the touch window has closed.
//! let real = InputEvent::mouse(MouseKind::Down, 5_000);
//! recent.record(&real);
//! assert_eq!(event_from(&real, &recent), InputModality::Mouse);
//! ```

use ui_events::keyboard::KeyState;
use ui_events::pointer::PointerType;

use crate::event::{EventKind, InputEvent, MouseKind, PointerKind};
use crate::state::{ActiveKind, FocusKind};
use crate::timing::RECENT_TOUCH_MS;

/// The input mechanism that produced an event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputModality {
    /// A mouse or trackpad.
    #[default]
    Mouse,
    /// A finger on a touch screen.
    Touch,
    /// A stylus.
    Pen,
    /// A keyboard.
    Keyboard,
}

impl InputModality {
    /// The conventional lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mouse => "mouse",
            Self::Touch => "touch",
            Self::Pen => "pen",
            Self::Keyboard => "keyboard",
        }
    }

    /// The active variant this modality presses with. Pens press like mice.
    #[must_use]
    pub const fn active_kind(self) -> ActiveKind {
        match self {
            Self::Mouse | Self::Pen => ActiveKind::Mouse,
            Self::Touch => ActiveKind::Touch,
            Self::Keyboard => ActiveKind::Key,
        }
    }

    /// The focus variant this modality focuses with. Pens focus like mice.
    #[must_use]
    pub const fn focus_kind(self) -> FocusKind {
        match self {
            Self::Mouse | Self::Pen => FocusKind::Mouse,
            Self::Touch => FocusKind::Touch,
            Self::Keyboard => FocusKind::Key,
        }
    }
}

/// Document-wide record of the most recent input.
///
/// Tracks the last modality seen and when the recent-touch window closes.
/// Mouse events that arrive inside that window are compatibility events
/// generated by the touch interaction and are attributed to touch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RecentInput {
    last: InputModality,
    touch_until: Option<u64>,
    window_ms: u64,
}

impl Default for RecentInput {
    fn default() -> Self {
        Self::new(RECENT_TOUCH_MS)
    }
}

impl RecentInput {
    /// Create a record with the given recent-touch window.
    #[must_use]
    pub const fn new(window_ms: u64) -> Self {
        Self {
            last: InputModality::Mouse,
            touch_until: None,
            window_ms,
        }
    }

    /// How long after touch activity mouse events count as touch.
    #[must_use]
    pub const fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// The most recently recorded modality.
    #[must_use]
    pub const fn last(&self) -> InputModality {
        self.last
    }

    /// A touch interaction ended less than the window ago.
    #[must_use]
    pub fn recently_touched(&self, now_ms: u64) -> bool {
        self.touch_until.is_some_and(|until| now_ms < until)
    }

    /// When the recent-touch window closes, if one is open.
    #[must_use]
    pub const fn touch_deadline(&self) -> Option<u64> {
        self.touch_until
    }

    /// Close an expired recent-touch window. Returns `true` if one closed.
    pub fn expire(&mut self, now_ms: u64) -> bool {
        match self.touch_until {
            Some(until) if now_ms >= until => {
                self.touch_until = None;
                true
            }
            _ => false,
        }
    }

    /// Update the record from a document-level event.
    pub fn record(&mut self, event: &InputEvent) {
        let now = event.time_ms;
        self.expire(now);
        match &event.kind {
            EventKind::Touch(_) => self.touched(now),
            EventKind::Pointer(_, pointer_type) if *pointer_type == PointerType::Touch => {
                self.touched(now);
            }
            EventKind::Pointer(kind, pointer_type) => {
                if !self.recently_touched(now) && records_device(*kind) {
                    self.last = if *pointer_type == PointerType::Pen {
                        InputModality::Pen
                    } else {
                        InputModality::Mouse
                    };
                }
            }
            EventKind::Mouse(kind) => {
                if !self.recently_touched(now) && *kind != MouseKind::Click {
                    self.last = InputModality::Mouse;
                }
            }
            EventKind::Key(state, _) => {
                if *state == KeyState::Down {
                    self.last = InputModality::Keyboard;
                }
            }
            EventKind::Focus | EventKind::Blur | EventKind::Drag(_) => {}
        }
    }

    fn touched(&mut self, now: u64) {
        self.last = InputModality::Touch;
        self.touch_until = Some(now.saturating_add(self.window_ms));
    }

    /// The modality to attribute a device-less event (click, focus, blur, drag) to.
    #[must_use]
    pub fn attribute(&self, now_ms: u64) -> InputModality {
        if self.recently_touched(now_ms) {
            InputModality::Touch
        } else {
            self.last
        }
    }
}

fn records_device(kind: PointerKind) -> bool {
    matches!(kind, PointerKind::Down | PointerKind::Enter | PointerKind::Up)
}

/// Classify which modality produced `event`.
///
/// Pointer events use their reported pointer type; a mouse-typed pointer event
/// inside the recent-touch window is a compatibility event and classifies as
/// touch. Legacy mouse events follow the same window. Click, focus, blur and
/// drag events are attributed from `recent`.
#[must_use]
pub fn event_from(event: &InputEvent, recent: &RecentInput) -> InputModality {
    let now = event.time_ms;
    match &event.kind {
        EventKind::Key(..) => InputModality::Keyboard,
        EventKind::Touch(_) => InputModality::Touch,
        EventKind::Pointer(_, pointer_type) => match *pointer_type {
            PointerType::Touch => InputModality::Touch,
            PointerType::Pen => InputModality::Pen,
            PointerType::Mouse if recent.recently_touched(now) => InputModality::Touch,
            PointerType::Mouse => InputModality::Mouse,
            _ => recent.attribute(now),
        },
        EventKind::Mouse(MouseKind::Click) => recent.attribute(now),
        EventKind::Mouse(_) => {
            if recent.recently_touched(now) {
                InputModality::Touch
            } else {
                InputModality::Mouse
            }
        }
        EventKind::Focus | EventKind::Blur | EventKind::Drag(_) => recent.attribute(now),
    }
}
