// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-instance interaction engine.
//!
//! [`Interactive`] wraps one [`Element`] and owns its [`InteractiveState`] plus
//! the ephemeral tracking data (held keys, drag flag, tap sequence, focus
//! provenance) that decides how raw events move that state.
//!
//! Every entry point returns a [`Response`]: the committed [`StateChange`] if
//! any, plus the derived effects the host acts on (a recognised tap, a
//! normalised click, a text-selection request). The engine owns no timers; see
//! [`Interactive::next_deadline`] and [`Interactive::poll`].
//!
//! ## Minimal example
//!
//! ```
//! use understory_interactive::element::{ElementKind, StaticElement};
//! use understory_interactive::engine::InteractiveBuilder;
//! use understory_interactive::event::{InputEvent, MouseKind};
//! use understory_interactive::modality::RecentInput;
//! use understory_interactive::state::ActiveKind;
//!
//! let mut recent = RecentInput::default();
//! let mut button = InteractiveBuilder::new()
//!     .build(StaticElement(ElementKind::Button))
//!     .unwrap();
//!
//! for event in [
//!     InputEvent::mouse(MouseKind::Enter, 0),
//!     InputEvent::mouse(MouseKind::Down, 10),
//! ] {
//!     recent.record(&event);
//!     button.handle(&event, &recent);
//! }
//! assert!(button.state().hover);
//! assert_eq!(button.state().active, Some(ActiveKind::Mouse));
//!
//! // No mouseup: leaving clears both.
//! let leave = InputEvent::mouse(MouseKind::Leave, 20);
//! recent.record(&leave);
//! let response = button.handle(&leave, &recent);
//! let change = response.change.unwrap();
//! assert!(!change.state.hover);
//! assert_eq!(change.state.active, None);
//! ```

use alloc::boxed::Box;
use core::fmt;

use smallvec::{SmallVec, smallvec};

use crate::element::Element;
use crate::error::ConfigError;
use crate::event::{DragKind, EventKind, EventTarget, InputEvent, MouseKind, PointerKind, TouchPhase};
use crate::focus::FocusTracker;
use crate::keys::KeyTracker;
use crate::modality::{InputModality, RecentInput, event_from};
use crate::router::{RouteContext, Transitions, route};
use crate::state::{ActiveKind, AxisValue, FocusKind, InteractiveState, StateChange, Transition};
use crate::tap::{TapCount, TapTracker};
use crate::timing::{Deadlines, TimerKind, Timing};

/// Callback invoked with every committed state change.
pub type StateChangeCallback = Box<dyn FnMut(&StateChange)>;

/// Document-wide text-selection request from an instance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextSelection {
    /// Disable text selection and the touch callout on the document.
    Suppress,
    /// Give text selection back.
    Restore,
}

/// What handling an event (or a deadline, or a configuration change) produced.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
    /// The committed state change, if the state changed.
    pub change: Option<StateChange>,
    /// A recognised tap.
    pub tap: Option<TapCount>,
    /// A normalised click: a native click that was not swallowed, or a single tap.
    pub click: bool,
    /// A text-selection request for the document.
    pub text_selection: Option<TextSelection>,
}

impl Response {
    /// Nothing happened.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Configures and builds an [`Interactive`].
pub struct InteractiveBuilder {
    disabled: bool,
    extended_touch_active: bool,
    timing: Timing,
    on_state_change: Option<StateChangeCallback>,
}

impl fmt::Debug for InteractiveBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractiveBuilder")
            .field("disabled", &self.disabled)
            .field("extended_touch_active", &self.extended_touch_active)
            .field("timing", &self.timing)
            .field("on_state_change", &self.on_state_change.is_some())
            .finish()
    }
}

impl Default for InteractiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractiveBuilder {
    /// Start from the defaults: enabled, click-timed touch-active, default [`Timing`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            disabled: false,
            extended_touch_active: false,
            timing: Timing::default(),
            on_state_change: None,
        }
    }

    /// Start disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Keep `touchActive` until the touch point really lifts.
    #[must_use]
    pub fn extended_touch_active(mut self, extended: bool) -> Self {
        self.extended_touch_active = extended;
        self
    }

    /// Override the timing constants.
    #[must_use]
    pub fn timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Be notified of every committed state change.
    #[must_use]
    pub fn on_state_change(mut self, callback: impl FnMut(&StateChange) + 'static) -> Self {
        self.on_state_change = Some(Box::new(callback));
        self
    }

    /// Validate the configuration and wrap `element`.
    pub fn build<E: Element>(self, element: E) -> Result<Interactive<E>, ConfigError> {
        self.timing.validate()?;
        Ok(Interactive {
            element,
            state: InteractiveState::INITIAL,
            disabled: self.disabled,
            extended_touch_active: self.extended_touch_active,
            timing: self.timing,
            tracking: TrackingContext::default(),
            deadlines: Deadlines::default(),
            on_state_change: self.on_state_change,
        })
    }
}

#[derive(Clone, Debug, Default)]
struct TrackingContext {
    keys: KeyTracker,
    dragging: bool,
    taps: TapTracker,
    focus: FocusTracker,
    /// Compatibility clicks before this time follow a tap that already clicked.
    tap_click_until: Option<u64>,
    selection_suppressed: bool,
}

/// Interaction state for one element.
pub struct Interactive<E> {
    element: E,
    state: InteractiveState,
    disabled: bool,
    extended_touch_active: bool,
    timing: Timing,
    tracking: TrackingContext,
    deadlines: Deadlines,
    on_state_change: Option<StateChangeCallback>,
}

impl<E: fmt::Debug> fmt::Debug for Interactive<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interactive")
            .field("element", &self.element)
            .field("state", &self.state)
            .field("disabled", &self.disabled)
            .field("extended_touch_active", &self.extended_touch_active)
            .field("tracking", &self.tracking)
            .field("deadlines", &self.deadlines)
            .finish_non_exhaustive()
    }
}

impl<E: Element> Interactive<E> {
    /// The current state.
    #[must_use]
    pub fn state(&self) -> InteractiveState {
        self.state
    }

    /// The wrapped element.
    #[must_use]
    pub fn element(&self) -> &E {
        &self.element
    }

    /// The wrapped element, mutably.
    pub fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }

    /// Whether the instance is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether extended touch-active mode is on.
    #[must_use]
    pub fn extended_touch_active(&self) -> bool {
        self.extended_touch_active
    }

    /// Currently held in `touchActive` under extended mode.
    ///
    /// Projection uses this to render the element non-selectable and non-draggable.
    #[must_use]
    pub fn in_extended_touch_active(&self) -> bool {
        self.extended_touch_active && self.state.active == Some(ActiveKind::Touch)
    }

    /// A native drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.tracking.dragging
    }

    /// The timing constants in use.
    #[must_use]
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// The earliest pending deadline; the host should call [`Self::poll`] then.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.deadlines.next()
    }

    /// Handle an event delivered to the element or one of its descendants.
    ///
    /// `recent` is the document-wide record, already updated with `event`.
    /// Events targeting [`EventTarget::Outside`] are forwarded to
    /// [`Self::on_document_event`].
    pub fn handle(&mut self, event: &InputEvent, recent: &RecentInput) -> Response {
        let mut response = Response::default();
        if event.target == EventTarget::Outside {
            self.on_document_event(event);
            return response;
        }

        let now = event.time_ms;
        let modality = event_from(event, recent);
        let mut cx = RouteContext {
            extended_touch_active: self.extended_touch_active,
            ..RouteContext::default()
        };
        let mut routable = true;

        match &event.kind {
            // Keys typed into a focused descendant belong to the descendant.
            EventKind::Key(..) if event.target != EventTarget::Element => routable = false,
            EventKind::Key(state, key) => {
                if self.tracking.keys.update(state, key) {
                    cx.key_active = Some(self.tracking.keys.is_key_active(&self.element.kind()));
                }
            }
            EventKind::Focus if event.target == EventTarget::Element => {
                if self.disabled {
                    log::debug!("focus arrived while disabled, blurring");
                    self.request_blur();
                    routable = false;
                } else {
                    let kind = self.tracking.focus.resolve_focus(modality.focus_kind(), now);
                    log::debug!("focus from {}", kind.as_str());
                    cx.focus = Some(kind);
                }
            }
            EventKind::Blur => {
                self.tracking.keys.reset();
                self.tracking.focus.resolve_blur();
            }
            EventKind::Drag(DragKind::Start) => self.tracking.dragging = true,
            EventKind::Drag(DragKind::End) => self.tracking.dragging = false,
            EventKind::Touch(touch) => {
                if let Some(count) = self.tracking.taps.touch(touch, now, &self.timing) {
                    self.tapped(count, now, recent.window_ms(), &mut response);
                }
            }
            EventKind::Mouse(MouseKind::Click) => response.click = self.native_click(now),
            EventKind::Mouse(MouseKind::Down) | EventKind::Pointer(PointerKind::Down, _)
                if matches!(modality, InputModality::Mouse | InputModality::Pen) =>
            {
                self.focus_on_press(FocusKind::Mouse, now);
            }
            _ => {}
        }

        let transitions = if routable {
            route(event, modality, &cx)
        } else {
            SmallVec::new()
        };
        if transitions.is_empty() && response.is_empty() {
            log::debug!(
                "ignored {} from {}",
                event.type_name(),
                modality.as_str()
            );
        }
        self.commit(&transitions, now, &mut response);
        response
    }

    /// Observe an event that happened elsewhere in the document.
    ///
    /// A touch starting outside the element while a tap sequence is in progress
    /// means the sequence is a multi-touch gesture, not a tap.
    pub fn on_document_event(&mut self, event: &InputEvent) {
        if let EventKind::Touch(touch) = &event.kind {
            if touch.phase == TouchPhase::Start && self.tracking.taps.is_tracking() {
                log::debug!("touch outside the element, canceling tap");
                self.tracking.taps.cancel();
            }
        }
    }

    /// Enable or disable the instance.
    ///
    /// Some platforms never send `blur` when a focused element becomes
    /// disabled; disabling a focused instance blurs it directly and clears
    /// focus and active state.
    pub fn set_disabled(&mut self, disabled: bool, now_ms: u64) -> Response {
        let mut response = Response::default();
        if self.disabled == disabled {
            return response;
        }
        self.disabled = disabled;
        if !disabled {
            return response;
        }
        self.tracking.keys.reset();
        self.tracking.taps.reset();
        self.tracking.tap_click_until = None;
        let transitions: Transitions = if self.state.focus.is_some() {
            log::debug!("disabled while focused, forcing blur");
            self.request_blur();
            smallvec![Transition::reset_focus(), Transition::reset_active()]
        } else {
            smallvec![Transition::exit_active(ActiveKind::Key)]
        };
        self.commit(&transitions, now_ms, &mut response);
        response
    }

    /// Set the state from outside.
    ///
    /// Gaining or losing focus is pushed to the element through its imperative
    /// focus and blur, recorded so the resulting platform event is attributed
    /// to the forced provenance.
    pub fn force_state(&mut self, state: InteractiveState, now_ms: u64) -> Response {
        match (self.state.focus, state.focus) {
            (None, Some(kind)) if self.element.is_focusable() => {
                self.focus_element(kind, now_ms);
            }
            (Some(_), None) => self.request_blur(),
            _ => {}
        }
        let mut response = Response::default();
        self.commit(
            &[
                Transition::enter_hover(state.hover),
                Transition::enter(AxisValue::Active(state.active)),
                Transition::enter(AxisValue::Focus(state.focus)),
            ],
            now_ms,
            &mut response,
        );
        response
    }

    /// Fire every deadline due at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> Response {
        let mut response = Response::default();
        if self.deadlines.take_due(TimerKind::TouchActiveExit, now_ms) {
            log::trace!("touch-active fallback exit at {now_ms}");
            self.commit(
                &[Transition::exit_active(ActiveKind::Touch)],
                now_ms,
                &mut response,
            );
        }
        if self.deadlines.take_due(TimerKind::TextSelectionRestore, now_ms)
            && self.tracking.selection_suppressed
        {
            log::trace!("restoring text selection at {now_ms}");
            self.tracking.selection_suppressed = false;
            response.text_selection = Some(TextSelection::Restore);
        }
        response
    }

    /// Tear the instance down: cancel deadlines and give back any suppression.
    pub fn unmount(&mut self) -> Response {
        self.deadlines.clear();
        self.tracking.taps.reset();
        self.tracking.keys.reset();
        self.tracking.focus.reset();
        self.tracking.tap_click_until = None;
        self.tracking.dragging = false;
        let mut response = Response::default();
        if self.tracking.selection_suppressed {
            self.tracking.selection_suppressed = false;
            response.text_selection = Some(TextSelection::Restore);
        }
        response
    }

    fn tapped(&mut self, count: TapCount, now: u64, window_ms: u64, response: &mut Response) {
        if self.disabled {
            log::debug!("tap on disabled element ignored");
            return;
        }
        log::trace!("{}-finger tap", count.fingers());
        response.tap = Some(count);
        if count == TapCount::One {
            response.click = true;
            self.tracking.tap_click_until = Some(now.saturating_add(window_ms));
            self.focus_on_press(FocusKind::Touch, now);
        }
    }

    fn native_click(&mut self, now: u64) -> bool {
        if self.disabled {
            return false;
        }
        match self.tracking.tap_click_until.take() {
            Some(until) if now < until => {
                log::debug!("swallowed compatibility click after tap");
                false
            }
            _ => true,
        }
    }

    fn focus_on_press(&mut self, kind: FocusKind, now: u64) {
        if self.disabled || self.state.focus.is_some() || !self.element.is_focusable() {
            return;
        }
        self.focus_element(kind, now);
    }

    fn focus_element(&mut self, kind: FocusKind, now: u64) {
        if self.tracking.focus.begin_focus(kind, now) {
            log::debug!("requesting focus with {} provenance", kind.as_str());
            if !self.element.focus() {
                self.tracking.focus.reset();
            }
        }
    }

    fn request_blur(&mut self) {
        if self.tracking.focus.begin_blur() && !self.element.blur() {
            self.tracking.focus.reset();
        }
    }

    fn commit(&mut self, transitions: &[Transition], now: u64, response: &mut Response) {
        let Some(change) = self.state.apply(transitions, self.tracking.dragging) else {
            return;
        };
        log::trace!("{} -> {}", change.prev_state, change.state);
        self.state = change.state;
        self.track_touch_active(&change, now, response);
        if let Some(callback) = &mut self.on_state_change {
            callback(&change);
        }
        response.change = Some(change);
    }

    fn track_touch_active(&mut self, change: &StateChange, now: u64, response: &mut Response) {
        let was = change.prev_state.active == Some(ActiveKind::Touch);
        let is = change.state.active == Some(ActiveKind::Touch);
        if !was && is {
            if self.extended_touch_active {
                self.deadlines.cancel(TimerKind::TextSelectionRestore);
                if !self.tracking.selection_suppressed {
                    self.tracking.selection_suppressed = true;
                    response.text_selection = Some(TextSelection::Suppress);
                }
            } else {
                let at = now.saturating_add(self.timing.touch_active_timeout_ms);
                log::trace!("touch-active fallback armed for {at}");
                self.deadlines.set(TimerKind::TouchActiveExit, at);
            }
        } else if was && !is {
            self.deadlines.cancel(TimerKind::TouchActiveExit);
            if self.tracking.selection_suppressed {
                let at = now.saturating_add(self.timing.text_selection_restore_ms);
                self.deadlines.set(TimerKind::TextSelectionRestore, at);
            }
        }
    }
}
