// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The routing table: event type plus classified modality to transitions.
//!
//! Pointer events are a superset of the legacy mouse and touch streams, so both
//! are routed through the same table: the outer match picks the modality, the
//! inner one the event type. Combinations the table does not name produce no
//! transitions.
//!
//! ```
//! use understory_interactive::event::{InputEvent, MouseKind};
//! use understory_interactive::modality::InputModality;
//! use understory_interactive::router::{RouteContext, route};
//! use understory_interactive::state::{ActiveKind, Transition};
//!
//! let leave = InputEvent::mouse(MouseKind::Leave, 0);
//! let transitions = route(&leave, InputModality::Mouse, &RouteContext::default());
//! assert_eq!(
//!     transitions.as_slice(),
//!     &[Transition::exit_hover(), Transition::exit_active(ActiveKind::Mouse)]
//! );
//! ```

use smallvec::{SmallVec, smallvec};

use crate::event::{DragKind, EventKind, EventTarget, InputEvent, MouseKind, PointerKind, TouchPhase};
use crate::modality::InputModality;
use crate::state::{ActiveKind, FocusKind, Transition};

/// A batch of transitions committed together.
pub type Transitions = SmallVec<[Transition; 2]>;

/// Per-event routing inputs that come from tracking rather than the event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteContext {
    /// Keep `touchActive` until the touch really ends.
    pub extended_touch_active: bool,
    /// For tracked activation keys: whether the held keys activate the element.
    /// `None` for keys that are not tracked.
    pub key_active: Option<bool>,
    /// Provenance to record for a focus event, overriding the classified modality.
    pub focus: Option<FocusKind>,
}

/// Select the transitions for `event`, classified as `modality`.
#[must_use]
pub fn route(event: &InputEvent, modality: InputModality, cx: &RouteContext) -> Transitions {
    match &event.kind {
        EventKind::Focus => {
            if event.target == EventTarget::Element {
                let kind = cx.focus.unwrap_or(modality.focus_kind());
                smallvec![Transition::enter_focus(kind)]
            } else {
                SmallVec::new()
            }
        }
        EventKind::Blur => smallvec![
            Transition::reset_focus(),
            Transition::exit_active(ActiveKind::Key)
        ],
        EventKind::Key(..) => match cx.key_active {
            Some(true) => smallvec![Transition::enter_active(ActiveKind::Key)],
            Some(false) => smallvec![Transition::exit_active(ActiveKind::Key)],
            None => SmallVec::new(),
        },
        EventKind::Drag(DragKind::Start) => {
            smallvec![Transition::enter_active(modality.active_kind())]
        }
        EventKind::Drag(DragKind::End) => smallvec![Transition::reset_active()],
        _ => match modality {
            InputModality::Mouse | InputModality::Pen => route_mouse(&event.kind),
            InputModality::Touch => route_touch(&event.kind, cx.extended_touch_active),
            InputModality::Keyboard => SmallVec::new(),
        },
    }
}

fn route_mouse(kind: &EventKind) -> Transitions {
    match kind {
        EventKind::Mouse(MouseKind::Enter) | EventKind::Pointer(PointerKind::Enter, _) => {
            smallvec![Transition::enter_hover(true)]
        }
        EventKind::Mouse(MouseKind::Leave)
        | EventKind::Pointer(PointerKind::Leave | PointerKind::Cancel, _) => leave(),
        EventKind::Mouse(MouseKind::Down) | EventKind::Pointer(PointerKind::Down, _) => {
            smallvec![Transition::enter_active(ActiveKind::Mouse)]
        }
        EventKind::Mouse(MouseKind::Up) | EventKind::Pointer(PointerKind::Up, _) => {
            smallvec![Transition::exit_active(ActiveKind::Mouse)]
        }
        _ => SmallVec::new(),
    }
}

fn route_touch(kind: &EventKind, extended_touch_active: bool) -> Transitions {
    match kind {
        EventKind::Pointer(PointerKind::Down, _) => {
            smallvec![Transition::enter_active(ActiveKind::Touch)]
        }
        EventKind::Touch(touch) => match touch.phase {
            TouchPhase::Start => smallvec![Transition::enter_active(ActiveKind::Touch)],
            TouchPhase::End | TouchPhase::Cancel => {
                smallvec![Transition::exit_active(ActiveKind::Touch)]
            }
            TouchPhase::Move => SmallVec::new(),
        },
        EventKind::Pointer(PointerKind::Up | PointerKind::Cancel, _) => {
            smallvec![Transition::exit_active(ActiveKind::Touch)]
        }
        // Compatibility mouse events arriving means the browser considers the
        // touch over; extended mode waits for the real end instead.
        EventKind::Mouse(MouseKind::Enter) if !extended_touch_active => {
            smallvec![Transition::exit_active(ActiveKind::Touch)]
        }
        // A tap elsewhere on a hybrid device sends a stray mouseleave to the
        // element the mouse last hovered.
        EventKind::Mouse(MouseKind::Leave) => leave(),
        _ => SmallVec::new(),
    }
}

fn leave() -> Transitions {
    smallvec![
        Transition::exit_hover(),
        Transition::exit_active(ActiveKind::Mouse)
    ]
}
