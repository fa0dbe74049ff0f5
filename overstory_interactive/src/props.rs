// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-supplied props, content and handlers.

use std::fmt;

use understory_interactive::InputModality;
use understory_interactive::event::InputEvent;
use understory_interactive::state::InteractiveState;
use understory_interactive::tap::TapCount;
use understory_interactive_style::StyleMap;

/// Plain props forwarded to the rendered element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Props {
    /// The caller's class names, rendered before any state class.
    pub class_name: Option<String>,
    /// The caller's base style, lowest precedence.
    pub style: Option<StyleMap>,
    /// Tab index; removed while disabled.
    pub tab_index: Option<i32>,
    /// Link target; removed while disabled.
    pub href: Option<String>,
    /// Any other attributes, passed through unchanged.
    pub attributes: Vec<(String, String)>,
}

/// What the component renders inside the element.
pub enum Content<T> {
    /// Fixed content.
    Static(T),
    /// Content recomputed from the state on every render.
    Render(Box<dyn Fn(InteractiveState) -> T>),
}

impl<T> Content<T> {
    /// Content computed from the state.
    pub fn from_fn(f: impl Fn(InteractiveState) -> T + 'static) -> Self {
        Self::Render(Box::new(f))
    }
}

impl<T: Clone> Content<T> {
    /// Produce the content for `state`.
    pub fn render(&self, state: InteractiveState) -> T {
        match self {
            Self::Static(content) => content.clone(),
            Self::Render(f) => f(state),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Content<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(content) => f.debug_tuple("Static").field(content).finish(),
            Self::Render(_) => f.write_str("Render(..)"),
        }
    }
}

/// Receives the modality of a normalised click.
pub type ClickHandler = Box<dyn FnMut(InputModality)>;
/// Receives a recognised tap.
pub type TapHandler = Box<dyn FnMut()>;
/// Receives every event after the component has handled it.
pub type EventHandler = Box<dyn FnMut(&InputEvent)>;

/// Caller callbacks.
#[derive(Default)]
pub struct Handlers {
    on_click: Option<ClickHandler>,
    on_tap: Option<TapHandler>,
    on_tap_two: Option<TapHandler>,
    on_tap_three: Option<TapHandler>,
    on_tap_four: Option<TapHandler>,
    on_event: Option<EventHandler>,
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("on_click", &self.on_click.is_some())
            .field("on_tap", &self.on_tap.is_some())
            .field("on_tap_two", &self.on_tap_two.is_some())
            .field("on_tap_three", &self.on_tap_three.is_some())
            .field("on_tap_four", &self.on_tap_four.is_some())
            .field("on_event", &self.on_event.is_some())
            .finish()
    }
}

impl Handlers {
    /// No handlers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called for native clicks and single-finger taps.
    #[must_use]
    pub fn on_click(mut self, f: impl FnMut(InputModality) + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    /// Called for single-finger taps.
    #[must_use]
    pub fn on_tap(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_tap = Some(Box::new(f));
        self
    }

    /// Called for two-finger taps.
    #[must_use]
    pub fn on_tap_two(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_tap_two = Some(Box::new(f));
        self
    }

    /// Called for three-finger taps.
    #[must_use]
    pub fn on_tap_three(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_tap_three = Some(Box::new(f));
        self
    }

    /// Called for four-finger taps.
    #[must_use]
    pub fn on_tap_four(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_tap_four = Some(Box::new(f));
        self
    }

    /// Called with every event, after internal handling.
    #[must_use]
    pub fn on_event(mut self, f: impl FnMut(&InputEvent) + 'static) -> Self {
        self.on_event = Some(Box::new(f));
        self
    }

    /// A click or tap handler is installed.
    #[must_use]
    pub fn has_click_behavior(&self) -> bool {
        self.on_click.is_some() || self.on_tap.is_some()
    }

    pub(crate) fn click(&mut self, modality: InputModality) {
        if let Some(f) = &mut self.on_click {
            f(modality);
        }
    }

    pub(crate) fn tap(&mut self, count: TapCount) {
        let handler = match count {
            TapCount::One => &mut self.on_tap,
            TapCount::Two => &mut self.on_tap_two,
            TapCount::Three => &mut self.on_tap_three,
            TapCount::Four => &mut self.on_tap_four,
        };
        if let Some(f) = handler {
            f();
        }
    }

    pub(crate) fn event(&mut self, event: &InputEvent) {
        if let Some(f) = &mut self.on_event {
            f(event);
        }
    }
}
