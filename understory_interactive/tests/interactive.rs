// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event-sequence tests for the `understory_interactive` engine.
//!
//! Each test drives one element through a realistic sequence of platform
//! events, recording every event on a shared bus first the way a document
//! would. Timing windows are the defaults, which are tuned rather than exact.

use std::cell::Cell;
use std::rc::Rc;

use kurbo::Point;
use ui_events::keyboard::{Key, KeyState, NamedKey};
use ui_events::pointer::PointerType;
use understory_interactive::element::{Element, ElementKind};
use understory_interactive::engine::{Interactive, InteractiveBuilder, Response};
use understory_interactive::event::{
    EventTarget, InputEvent, MouseKind, PointerKind, TouchPhase, TouchPoint,
};
use understory_interactive::state::{ActiveKind, FocusKind, InteractiveState};
use understory_interactive::tap::TapCount;
use understory_interactive::InputBus;

#[derive(Debug)]
struct Recorder {
    kind: ElementKind,
    focus_calls: usize,
    blur_calls: usize,
}

impl Element for Recorder {
    fn kind(&self) -> ElementKind {
        self.kind.clone()
    }

    fn focus(&mut self) -> bool {
        self.focus_calls += 1;
        true
    }

    fn blur(&mut self) -> bool {
        self.blur_calls += 1;
        true
    }
}

struct Harness {
    bus: InputBus,
    it: Interactive<Recorder>,
    changes: Rc<Cell<usize>>,
}

impl Harness {
    fn new(kind: ElementKind) -> Self {
        Self::with(kind, InteractiveBuilder::new())
    }

    fn with(kind: ElementKind, builder: InteractiveBuilder) -> Self {
        let changes = Rc::new(Cell::new(0));
        let counter = Rc::clone(&changes);
        let it = builder
            .on_state_change(move |_| counter.set(counter.get() + 1))
            .build(Recorder {
                kind,
                focus_calls: 0,
                blur_calls: 0,
            })
            .unwrap();
        Self {
            bus: InputBus::default(),
            it,
            changes,
        }
    }

    fn send(&mut self, event: InputEvent) -> Response {
        self.bus.record(&event);
        self.it.handle(&event, self.bus.recent())
    }

    fn state(&self) -> InteractiveState {
        self.it.state()
    }
}

fn space() -> Key {
    Key::Character(" ".into())
}

fn touch(phase: TouchPhase, id: u64, x: f64, y: f64, on_target: usize, time: u64) -> InputEvent {
    InputEvent::touch(
        phase,
        [TouchPoint::new(id, Point::new(x, y))],
        on_target,
        on_target,
        time,
    )
}

#[test]
fn leaving_without_mouseup_clears_hover_and_active() {
    let mut h = Harness::new(ElementKind::Button);
    h.send(InputEvent::mouse(MouseKind::Enter, 0));
    h.send(InputEvent::mouse(MouseKind::Down, 10));
    assert_eq!(
        h.state(),
        InteractiveState {
            hover: true,
            active: Some(ActiveKind::Mouse),
            focus: None,
        }
    );

    let response = h.send(InputEvent::mouse(MouseKind::Leave, 20));
    let change = response.change.unwrap();
    assert!(!change.state.hover);
    assert_eq!(change.state.active, None);
    assert_eq!(change.prev_state.active, Some(ActiveKind::Mouse));
}

#[test]
fn duplicate_press_notifies_once() {
    let mut h = Harness::new(ElementKind::Button);
    h.send(InputEvent::mouse(MouseKind::Enter, 0));
    assert_eq!(h.changes.get(), 1);

    let first = h.send(InputEvent::pointer(PointerKind::Down, PointerType::Mouse, 10));
    assert!(first.change.is_some());
    let second = h.send(InputEvent::mouse(MouseKind::Down, 10));
    assert!(second.change.is_none());
    assert_eq!(h.changes.get(), 2);
    // The second press does not issue another imperative focus.
    assert_eq!(h.it.element().focus_calls, 1);
}

#[test]
fn disabling_a_key_focused_element_forces_blur() {
    let mut h = Harness::new(ElementKind::Button);
    h.send(InputEvent::key(KeyState::Down, Key::Named(NamedKey::Tab), 0));
    h.send(InputEvent::focus(1));
    assert_eq!(h.state().focus, Some(FocusKind::Key));
    h.send(InputEvent::key(KeyState::Down, space(), 2));
    assert_eq!(h.state().active, Some(ActiveKind::Key));

    let response = h.it.set_disabled(true, 3);
    let change = response.change.unwrap();
    assert_eq!(change.state.focus, None);
    assert_eq!(change.state.active, None);
    assert_eq!(h.it.element().blur_calls, 1);

    // The platform's own blur, if it comes at all, changes nothing further.
    assert!(h.send(InputEvent::blur(4)).change.is_none());
}

#[test]
fn focus_while_disabled_is_answered_with_blur() {
    let mut h = Harness::with(ElementKind::Button, InteractiveBuilder::new().disabled(true));
    let response = h.send(InputEvent::focus(0));
    assert!(response.change.is_none());
    assert_eq!(h.it.element().blur_calls, 1);
    assert_eq!(h.state().focus, None);
}

#[test]
fn compatibility_mouseenter_ends_touch_active() {
    let mut h = Harness::new(ElementKind::Button);
    h.send(touch(TouchPhase::Start, 0, 50.0, 50.0, 1, 0));
    assert_eq!(h.state().active, Some(ActiveKind::Touch));

    h.send(InputEvent::mouse(MouseKind::Enter, 100));
    assert_eq!(h.state().active, None);
    assert!(!h.state().hover, "touch must never produce hover");
}

#[test]
fn extended_touch_active_survives_mouseenter() {
    let mut h = Harness::with(
        ElementKind::Button,
        InteractiveBuilder::new().extended_touch_active(true),
    );
    h.send(touch(TouchPhase::Start, 0, 50.0, 50.0, 1, 0));
    h.send(InputEvent::mouse(MouseKind::Enter, 100));
    assert_eq!(h.state().active, Some(ActiveKind::Touch));
    assert_eq!(h.it.next_deadline(), None, "no fallback exit in extended mode");

    h.send(touch(TouchPhase::End, 0, 50.0, 50.0, 0, 900));
    assert_eq!(h.state().active, None);
}

#[test]
fn single_tap_clicks_and_focuses_with_touch_provenance() {
    let mut h = Harness::new(ElementKind::Button);
    assert_eq!(h.send(touch(TouchPhase::Start, 3, 100.0, 100.0, 1, 0)).tap, None);
    let response = h.send(touch(TouchPhase::End, 3, 105.0, 103.0, 0, 120));
    assert_eq!(response.tap, Some(TapCount::One));
    assert!(response.click);
    assert_eq!(h.it.element().focus_calls, 1);

    h.send(InputEvent::focus(130));
    assert_eq!(h.state().focus, Some(FocusKind::Touch));
}

#[test]
fn moving_finger_is_not_a_tap() {
    let mut h = Harness::new(ElementKind::Button);
    h.send(touch(TouchPhase::Start, 3, 100.0, 100.0, 1, 0));
    let response = h.send(touch(TouchPhase::End, 3, 130.0, 100.0, 0, 120));
    assert_eq!(response.tap, None);
    assert!(!response.click);
}

#[test]
fn two_finger_tap_fires_only_the_two_finger_count() {
    let mut h = Harness::new(ElementKind::Other("div".into()));
    h.send(touch(TouchPhase::Start, 1, 10.0, 10.0, 1, 0));
    h.send(touch(TouchPhase::Start, 2, 60.0, 10.0, 2, 20));
    let first_lift = h.send(touch(TouchPhase::End, 1, 11.0, 10.0, 1, 100));
    assert_eq!(first_lift.tap, None);
    let last_lift = h.send(touch(TouchPhase::End, 2, 61.0, 12.0, 0, 110));
    assert_eq!(last_lift.tap, Some(TapCount::Two));
    assert!(!last_lift.click, "only single taps click");
}

#[test]
fn touch_elsewhere_cancels_the_tap() {
    let mut h = Harness::new(ElementKind::Button);
    h.send(touch(TouchPhase::Start, 1, 10.0, 10.0, 1, 0));
    let outside = touch(TouchPhase::Start, 9, 400.0, 400.0, 1, 30).with_target(EventTarget::Outside);
    assert!(h.send(outside).is_empty());
    let response = h.send(touch(TouchPhase::End, 1, 10.0, 10.0, 0, 100));
    assert_eq!(response.tap, None);
}

#[test]
fn tap_swallows_the_compatibility_click() {
    let mut h = Harness::new(ElementKind::Button);
    h.send(touch(TouchPhase::Start, 1, 10.0, 10.0, 1, 0));
    assert!(h.send(touch(TouchPhase::End, 1, 10.0, 10.0, 0, 80)).click);
    assert!(!h.send(InputEvent::mouse(MouseKind::Click, 120)).click);
    assert!(h.send(InputEvent::mouse(MouseKind::Click, 5_000)).click);
}

#[test]
fn touch_active_falls_back_after_timeout() {
    let mut h = Harness::new(ElementKind::Button);
    h.send(touch(TouchPhase::Start, 1, 10.0, 10.0, 1, 0));
    assert_eq!(h.it.next_deadline(), Some(750));
    assert!(h.it.poll(749).is_empty());
    let response = h.it.poll(750);
    assert_eq!(response.change.map(|c| c.state.active), Some(None));
    assert_eq!(h.it.next_deadline(), None);
}

#[test]
fn ghost_mouse_events_after_touch_do_not_hover() {
    let mut h = Harness::new(ElementKind::Button);
    h.send(touch(TouchPhase::Start, 1, 10.0, 10.0, 1, 0));
    h.send(touch(TouchPhase::End, 1, 10.0, 10.0, 0, 50));
    h.send(InputEvent::pointer(PointerKind::Enter, PointerType::Mouse, 60));
    h.send(InputEvent::mouse(MouseKind::Enter, 61));
    h.send(InputEvent::mouse(MouseKind::Down, 62));
    assert!(!h.state().hover);
    assert_eq!(h.state().active, None);

    // Long after the touch, the same mouse event is a real hover.
    h.send(InputEvent::mouse(MouseKind::Enter, 2_000));
    assert!(h.state().hover);
}

#[test]
fn pen_hovers_and_presses_like_a_mouse() {
    let mut h = Harness::new(ElementKind::Button);
    h.send(InputEvent::pointer(PointerKind::Enter, PointerType::Pen, 0));
    h.send(InputEvent::pointer(PointerKind::Down, PointerType::Pen, 10));
    assert!(h.state().hover);
    assert_eq!(h.state().active, Some(ActiveKind::Mouse));
}

#[test]
fn pending_focus_keeps_mouse_provenance() {
    let mut h = Harness::new(ElementKind::Button);
    h.send(InputEvent::pointer(PointerKind::Down, PointerType::Mouse, 0));
    assert_eq!(h.it.element().focus_calls, 1);
    // A modifier press lands before the queued focus event is delivered.
    h.send(InputEvent::key(KeyState::Down, Key::Named(NamedKey::Shift), 5));
    h.send(InputEvent::focus(6));
    assert_eq!(h.state().focus, Some(FocusKind::Mouse));
}

#[test]
fn forced_focus_is_pushed_to_the_element() {
    let mut h = Harness::new(ElementKind::Button);
    let forced = InteractiveState {
        focus: Some(FocusKind::Key),
        ..InteractiveState::INITIAL
    };
    assert!(h.it.force_state(forced, 0).change.is_some());
    assert_eq!(h.it.element().focus_calls, 1);

    h.send(InputEvent::mouse(MouseKind::Down, 10));
    assert_eq!(h.it.element().focus_calls, 1, "already focused");
    let response = h.send(InputEvent::focus(11));
    assert!(response.change.is_none());
    assert_eq!(h.state().focus, Some(FocusKind::Key));

    h.it.force_state(InteractiveState::INITIAL, 20);
    assert_eq!(h.it.element().blur_calls, 1);
}

#[test]
fn bubbled_focus_is_ignored() {
    let mut h = Harness::new(ElementKind::FormGroup);
    h.send(InputEvent::key(KeyState::Down, Key::Named(NamedKey::Tab), 0));
    h.send(InputEvent::focus(1).with_target(EventTarget::Descendant));
    assert_eq!(h.state().focus, None);
}

#[test]
fn enter_does_not_activate_a_select() {
    let mut h = Harness::new(ElementKind::Select);
    h.send(InputEvent::key(KeyState::Down, Key::Named(NamedKey::Tab), 0));
    h.send(InputEvent::focus(1));
    h.send(InputEvent::key(KeyState::Down, Key::Named(NamedKey::Enter), 2));
    assert_eq!(h.state().active, None);
    h.send(InputEvent::key(KeyState::Down, space(), 3));
    assert_eq!(h.state().active, Some(ActiveKind::Key));
    h.send(InputEvent::key(KeyState::Up, space(), 4));
    assert_eq!(h.state().active, None);
}

#[test]
fn blur_forgets_held_keys() {
    let mut h = Harness::new(ElementKind::Button);
    h.send(InputEvent::focus(0));
    h.send(InputEvent::key(KeyState::Down, space(), 1));
    h.send(InputEvent::blur(2));
    assert_eq!(h.state(), InteractiveState::INITIAL);

    // Focus returns and Enter is pressed: the stale space must not linger.
    h.send(InputEvent::focus(3));
    h.send(InputEvent::key(KeyState::Down, Key::Named(NamedKey::Enter), 4));
    h.send(InputEvent::key(KeyState::Up, Key::Named(NamedKey::Enter), 5));
    assert_eq!(h.state().active, None);
}

#[test]
fn keys_typed_into_a_descendant_do_not_activate() {
    let mut h = Harness::new(ElementKind::Other(String::from("div")));
    let enter = || Key::Named(NamedKey::Enter);
    h.send(InputEvent::key(KeyState::Down, enter(), 0).with_target(EventTarget::Descendant));
    assert_eq!(h.state().active, None);
    h.send(InputEvent::key(KeyState::Up, enter(), 1).with_target(EventTarget::Descendant));
    assert_eq!(h.changes.get(), 0);

    h.send(InputEvent::key(KeyState::Down, enter(), 2));
    assert_eq!(h.state().active, Some(ActiveKind::Key));
}

#[test]
fn unanswered_focus_request_does_not_leak_into_tab_focus() {
    let mut h = Harness::new(ElementKind::Button);
    h.send(InputEvent::mouse(MouseKind::Down, 0));
    h.send(InputEvent::mouse(MouseKind::Up, 80));
    assert_eq!(h.it.element().focus_calls, 1);
    // The host never delivers the focus event for that request.
    h.send(InputEvent::key(KeyState::Down, Key::Named(NamedKey::Tab), 5_000));
    h.send(InputEvent::focus(5_001));
    assert_eq!(h.state().focus, Some(FocusKind::Key));
}
