// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw platform input events as the engine sees them.
//!
//! Hosts translate their native events (DOM mouse/pointer/touch/keyboard/focus/drag
//! events or a windowing toolkit's equivalents) into [`InputEvent`]s. Pointer types
//! and keys use the `ui-events` vocabulary so that translation from
//! `ui-events`-based toolkits is a field copy.
//!
//! ```
//! use kurbo::Point;
//! use ui_events::pointer::PointerType;
//! use understory_interactive::event::{InputEvent, MouseKind, PointerKind, TouchPhase, TouchPoint};
//!
//! let enter = InputEvent::mouse(MouseKind::Enter, 0);
//! assert_eq!(enter.type_name(), "mouseenter");
//!
//! let down = InputEvent::pointer(PointerKind::Down, PointerType::Touch, 10);
//! assert_eq!(down.type_name(), "pointerdown");
//!
//! let start = InputEvent::touch(TouchPhase::Start, [TouchPoint::new(0, Point::new(1.0, 2.0))], 1, 1, 10);
//! assert_eq!(start.type_name(), "touchstart");
//! ```

use kurbo::Point;
use smallvec::SmallVec;
use ui_events::keyboard::{Key, KeyState};
use ui_events::pointer::PointerType;

/// Where an event was dispatched relative to the interactive element.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EventTarget {
    /// The interactive element itself is the direct target.
    #[default]
    Element,
    /// The event bubbled up from a descendant.
    Descendant,
    /// The event happened elsewhere in the document.
    Outside,
}

/// Legacy mouse event types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseKind {
    /// `mouseenter`.
    Enter,
    /// `mouseleave`.
    Leave,
    /// `mousedown`.
    Down,
    /// `mouseup`.
    Up,
    /// `click`.
    Click,
}

/// Unified pointer event types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// `pointerenter`.
    Enter,
    /// `pointerleave`.
    Leave,
    /// `pointerdown`.
    Down,
    /// `pointerup`.
    Up,
    /// `pointercancel`.
    Cancel,
}

/// Touch event phases.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// `touchstart`.
    Start,
    /// `touchmove`.
    Move,
    /// `touchend`.
    End,
    /// `touchcancel`.
    Cancel,
}

/// Native drag-and-drop event types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DragKind {
    /// `dragstart`.
    Start,
    /// `dragend`.
    End,
}

/// One touch point reported by a touch event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchPoint {
    /// Platform touch identifier, stable for the lifetime of the contact.
    pub id: u64,
    /// Client position of the contact.
    pub position: Point,
}

impl TouchPoint {
    /// Create a touch point.
    #[must_use]
    pub const fn new(id: u64, position: Point) -> Self {
        Self { id, position }
    }
}

/// A touch event: the points that changed plus the touch counts the
/// disambiguator compares.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    /// Phase of the event.
    pub phase: TouchPhase,
    /// Points that changed in this event.
    pub changed: SmallVec<[TouchPoint; 2]>,
    /// Number of touches currently on the target element (after this event).
    pub target_touches: usize,
    /// Number of touches currently anywhere on the page (after this event).
    pub page_touches: usize,
}

/// The type-specific payload of an [`InputEvent`].
#[derive(Clone, Debug, PartialEq)]
pub enum EventKind {
    /// A legacy mouse event.
    Mouse(MouseKind),
    /// A unified pointer event with its platform-reported pointer type.
    Pointer(PointerKind, PointerType),
    /// A legacy touch event.
    Touch(TouchEvent),
    /// A key press or release.
    Key(KeyState, Key),
    /// The element (or a descendant) gained focus.
    Focus,
    /// The element lost focus.
    Blur,
    /// A native drag started or ended.
    Drag(DragKind),
}

/// A raw input event with its timestamp and target relation.
#[derive(Clone, Debug, PartialEq)]
pub struct InputEvent {
    /// Event timestamp in milliseconds on a monotonic clock.
    pub time_ms: u64,
    /// Where the event was dispatched.
    pub target: EventTarget,
    /// What happened.
    pub kind: EventKind,
}

impl InputEvent {
    /// Create an event targeting the element itself.
    #[must_use]
    pub const fn new(kind: EventKind, time_ms: u64) -> Self {
        Self {
            time_ms,
            target: EventTarget::Element,
            kind,
        }
    }

    /// A legacy mouse event.
    #[must_use]
    pub const fn mouse(kind: MouseKind, time_ms: u64) -> Self {
        Self::new(EventKind::Mouse(kind), time_ms)
    }

    /// A pointer event.
    #[must_use]
    pub const fn pointer(kind: PointerKind, pointer_type: PointerType, time_ms: u64) -> Self {
        Self::new(EventKind::Pointer(kind, pointer_type), time_ms)
    }

    /// A touch event.
    #[must_use]
    pub fn touch(
        phase: TouchPhase,
        changed: impl IntoIterator<Item = TouchPoint>,
        target_touches: usize,
        page_touches: usize,
        time_ms: u64,
    ) -> Self {
        Self::new(
            EventKind::Touch(TouchEvent {
                phase,
                changed: changed.into_iter().collect(),
                target_touches,
                page_touches,
            }),
            time_ms,
        )
    }

    /// A key event.
    #[must_use]
    pub const fn key(state: KeyState, key: Key, time_ms: u64) -> Self {
        Self::new(EventKind::Key(state, key), time_ms)
    }

    /// A focus event.
    #[must_use]
    pub const fn focus(time_ms: u64) -> Self {
        Self::new(EventKind::Focus, time_ms)
    }

    /// A blur event.
    #[must_use]
    pub const fn blur(time_ms: u64) -> Self {
        Self::new(EventKind::Blur, time_ms)
    }

    /// A drag event.
    #[must_use]
    pub const fn drag(kind: DragKind, time_ms: u64) -> Self {
        Self::new(EventKind::Drag(kind), time_ms)
    }

    /// Return this event with a different target relation.
    #[must_use]
    pub fn with_target(mut self, target: EventTarget) -> Self {
        self.target = target;
        self
    }

    /// The DOM event type name, for diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match &self.kind {
            EventKind::Mouse(kind) => match kind {
                MouseKind::Enter => "mouseenter",
                MouseKind::Leave => "mouseleave",
                MouseKind::Down => "mousedown",
                MouseKind::Up => "mouseup",
                MouseKind::Click => "click",
            },
            EventKind::Pointer(kind, _) => match kind {
                PointerKind::Enter => "pointerenter",
                PointerKind::Leave => "pointerleave",
                PointerKind::Down => "pointerdown",
                PointerKind::Up => "pointerup",
                PointerKind::Cancel => "pointercancel",
            },
            EventKind::Touch(touch) => match touch.phase {
                TouchPhase::Start => "touchstart",
                TouchPhase::Move => "touchmove",
                TouchPhase::End => "touchend",
                TouchPhase::Cancel => "touchcancel",
            },
            EventKind::Key(KeyState::Down, _) => "keydown",
            EventKind::Key(..) => "keyup",
            EventKind::Focus => "focus",
            EventKind::Blur => "blur",
            EventKind::Drag(DragKind::Start) => "dragstart",
            EventKind::Drag(DragKind::End) => "dragend",
        }
    }
}
