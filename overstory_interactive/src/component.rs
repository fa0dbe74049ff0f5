// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interactive component: engine, styles, props and handlers in one place.

use understory_interactive::element::Element;
use understory_interactive::engine::{Interactive, InteractiveBuilder, Response};
use understory_interactive::event::InputEvent;
use understory_interactive::modality::{InputModality, RecentInput, event_from};
use understory_interactive::state::InteractiveState;
use understory_interactive::ConfigError;
use understory_interactive_style::{ProjectionInput, StateStyles, StyleMap, project};

use crate::props::{Content, Handlers, Props};

/// The render output of a [`Component`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered<T> {
    /// Merged class names, space-separated.
    pub class_name: String,
    /// Merged inline style.
    pub style: StyleMap,
    /// Tab index, absent while disabled.
    pub tab_index: Option<i32>,
    /// Link target, absent while disabled.
    pub href: Option<String>,
    /// Render the native `disabled` attribute.
    pub disabled: bool,
    /// `Some(false)` to turn native dragging off.
    pub draggable: Option<bool>,
    /// Click handling is bound.
    pub clickable: bool,
    /// Pass-through attributes.
    pub attributes: Vec<(String, String)>,
    /// The content.
    pub content: T,
}

/// Builds a [`Component`] from one configuration.
#[derive(Debug)]
pub struct ComponentBuilder<T> {
    interactive: InteractiveBuilder,
    styles: StateStyles,
    props: Props,
    handlers: Handlers,
    content: Content<T>,
}

impl<T> ComponentBuilder<T> {
    /// Start with `content` and defaults for everything else.
    pub fn new(content: Content<T>) -> Self {
        Self {
            interactive: InteractiveBuilder::new(),
            styles: StateStyles::default(),
            props: Props::default(),
            handlers: Handlers::new(),
            content,
        }
    }

    /// Engine configuration.
    #[must_use]
    pub fn interactive(mut self, interactive: InteractiveBuilder) -> Self {
        self.interactive = interactive;
        self
    }

    /// Per-state class names and styles.
    #[must_use]
    pub fn styles(mut self, styles: StateStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Pass-through props.
    #[must_use]
    pub fn props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    /// Callbacks.
    #[must_use]
    pub fn handlers(mut self, handlers: Handlers) -> Self {
        self.handlers = handlers;
        self
    }

    /// Wrap `element`.
    pub fn build<E: Element>(self, element: E) -> Result<Component<E, T>, ConfigError> {
        Ok(Component {
            engine: self.interactive.build(element)?,
            styles: self.styles,
            props: self.props,
            handlers: self.handlers,
            content: self.content,
        })
    }
}

/// An interactive element with its rendering configuration.
#[derive(Debug)]
pub struct Component<E, T> {
    engine: Interactive<E>,
    styles: StateStyles,
    props: Props,
    handlers: Handlers,
    content: Content<T>,
}

impl<E: Element, T> Component<E, T> {
    /// The current state.
    #[must_use]
    pub fn state(&self) -> InteractiveState {
        self.engine.state()
    }

    /// The engine.
    #[must_use]
    pub fn engine(&self) -> &Interactive<E> {
        &self.engine
    }

    /// The wrapped element, mutably.
    pub fn element_mut(&mut self) -> &mut E {
        self.engine.element_mut()
    }

    /// The props.
    #[must_use]
    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Replace the props.
    pub fn set_props(&mut self, props: Props) {
        self.props = props;
    }

    /// Handle an event targeting this component.
    ///
    /// Internal handling runs first; click, tap and pass-through handlers fire after.
    pub fn handle(&mut self, event: &InputEvent, recent: &RecentInput) -> Response {
        let response = self.engine.handle(event, recent);
        if let Some(count) = response.tap {
            self.handlers.tap(count);
        }
        if response.click {
            let modality = if response.tap.is_some() {
                InputModality::Touch
            } else {
                event_from(event, recent)
            };
            self.handlers.click(modality);
        }
        self.handlers.event(event);
        response
    }

    /// Observe an event elsewhere in the document.
    pub fn observe(&mut self, event: &InputEvent) {
        self.engine.on_document_event(event);
    }

    /// See [`Interactive::set_disabled`].
    pub fn set_disabled(&mut self, disabled: bool, now_ms: u64) -> Response {
        self.engine.set_disabled(disabled, now_ms)
    }

    /// See [`Interactive::force_state`].
    pub fn force_state(&mut self, state: InteractiveState, now_ms: u64) -> Response {
        self.engine.force_state(state, now_ms)
    }

    /// See [`Interactive::poll`].
    pub fn poll(&mut self, now_ms: u64) -> Response {
        self.engine.poll(now_ms)
    }

    /// See [`Interactive::next_deadline`].
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.engine.next_deadline()
    }

    /// See [`Interactive::unmount`].
    pub fn unmount(&mut self) -> Response {
        self.engine.unmount()
    }
}

impl<E: Element, T: Clone> Component<E, T> {
    /// Render for the current state.
    ///
    /// While disabled, state styling, click handling, the tab index and the
    /// link target are all dropped, and the native `disabled` attribute is set
    /// on elements that support it.
    #[must_use]
    pub fn render(&self) -> Rendered<T> {
        let state = self.engine.state();
        let disabled = self.engine.is_disabled();
        let clickable =
            !disabled && (self.handlers.has_click_behavior() || self.props.href.is_some());
        let projection = project(
            &self.styles,
            &ProjectionInput {
                state,
                disabled,
                clickable,
                in_extended_touch_active: self.engine.in_extended_touch_active(),
                class_name: self.props.class_name.as_deref(),
                style: self.props.style.as_ref(),
            },
        );
        Rendered {
            class_name: projection.class_name.to_string(),
            style: projection.style,
            tab_index: self.props.tab_index.filter(|_| !disabled),
            href: self.props.href.clone().filter(|_| !disabled),
            disabled: disabled && self.engine.element().kind().supports_disabled(),
            draggable: projection.draggable,
            clickable,
            attributes: self.props.attributes.clone(),
            content: self.content.render(state),
        }
    }
}
