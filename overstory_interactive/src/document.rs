// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document-level dispatch: one input bus, many mounted components.

use hashbrown::HashMap;

use understory_interactive::ConfigError;
use understory_interactive::bus::{InputBus, Lifecycle, SubscriptionId};
use understory_interactive::element::Element;
use understory_interactive::engine::{Response, TextSelection};
use understory_interactive::event::InputEvent;

use crate::component::{Component, Rendered};

/// Identifies a mounted component.
pub type InstanceId = SubscriptionId;

/// The outcome of dispatching one event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Dispatched {
    /// What the targeted component reported.
    pub response: Response,
    /// A change to document-wide text selection the host must apply.
    pub text_selection: Option<TextSelection>,
}

/// The outcome of firing deadlines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polled {
    /// Components whose state changed.
    pub changed: Vec<(InstanceId, Response)>,
    /// A change to document-wide text selection the host must apply.
    pub text_selection: Option<TextSelection>,
}

/// Owns the input bus and every mounted component of a document.
///
/// Every event goes through [`Document::dispatch`]: it is recorded on the bus,
/// shown to every other component as a document event, then handled by its
/// target. Text-selection requests from components are reference counted on
/// the bus, and only the net document-level change is reported.
#[derive(Debug)]
pub struct Document<E, T> {
    bus: InputBus,
    instances: HashMap<InstanceId, Component<E, T>>,
}

impl<E: Element, T> Default for Document<E, T> {
    fn default() -> Self {
        Self {
            bus: InputBus::default(),
            instances: HashMap::new(),
        }
    }
}

impl<E: Element, T> Document<E, T> {
    /// An empty document whose recent-touch window lasts `recent_touch_ms`.
    ///
    /// The window is shared by every mounted component: it decides both when
    /// mouse events are touch noise and how long a tap swallows the browser's
    /// compatibility click.
    pub fn new(recent_touch_ms: u64) -> Result<Self, ConfigError> {
        if recent_touch_ms == 0 {
            return Err(ConfigError::InvalidTiming {
                field: "recent_touch_ms",
            });
        }
        Ok(Self {
            bus: InputBus::new(recent_touch_ms),
            instances: HashMap::new(),
        })
    }

    /// The shared input bus.
    #[must_use]
    pub fn bus(&self) -> &InputBus {
        &self.bus
    }

    /// Number of mounted components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Returns `true` if nothing is mounted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Mount `component`. [`Lifecycle::Started`] asks the host to install its
    /// document listeners.
    pub fn mount(&mut self, component: Component<E, T>) -> (InstanceId, Lifecycle) {
        let (id, lifecycle) = self.bus.subscribe();
        log::debug!("mounted instance {}", id.get());
        self.instances.insert(id, component);
        (id, lifecycle)
    }

    /// Unmount a component, cancelling its deadlines and releasing its
    /// text-selection hold. [`Lifecycle::Stopped`] asks the host to remove its
    /// document listeners.
    pub fn unmount(
        &mut self,
        id: InstanceId,
    ) -> Option<(Component<E, T>, Lifecycle, Option<TextSelection>)> {
        let mut component = self.instances.remove(&id)?;
        let was = self.bus.text_selection_suppressed();
        let response = component.unmount();
        self.apply_selection(response.text_selection);
        let lifecycle = self.bus.unsubscribe(id);
        log::debug!("unmounted instance {}", id.get());
        Some((component, lifecycle, self.selection_change(was)))
    }

    /// A mounted component.
    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&Component<E, T>> {
        self.instances.get(&id)
    }

    /// A mounted component, mutably.
    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut Component<E, T>> {
        self.instances.get_mut(&id)
    }

    /// Dispatch `event` to `target` (or to no component, for document-only events).
    pub fn dispatch(&mut self, target: Option<InstanceId>, event: &InputEvent) -> Dispatched {
        let was = self.bus.text_selection_suppressed();
        self.bus.record(event);
        for (id, component) in &mut self.instances {
            if Some(*id) != target {
                component.observe(event);
            }
        }
        let response = match target.and_then(|id| self.instances.get_mut(&id)) {
            Some(component) => component.handle(event, self.bus.recent()),
            None => {
                if target.is_some() {
                    log::debug!("{} for an unmounted instance", event.type_name());
                }
                Response::default()
            }
        };
        self.apply_selection(response.text_selection);
        Dispatched {
            response,
            text_selection: self.selection_change(was),
        }
    }

    /// Change a component's disabled flag.
    pub fn set_disabled(
        &mut self,
        id: InstanceId,
        disabled: bool,
        now_ms: u64,
    ) -> Option<Dispatched> {
        let was = self.bus.text_selection_suppressed();
        let response = self.instances.get_mut(&id)?.set_disabled(disabled, now_ms);
        self.apply_selection(response.text_selection);
        Some(Dispatched {
            response,
            text_selection: self.selection_change(was),
        })
    }

    /// The earliest deadline of the bus or any component.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.instances
            .values()
            .filter_map(Component::next_deadline)
            .chain(self.bus.next_deadline())
            .min()
    }

    /// Fire every deadline due at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> Polled {
        let was = self.bus.text_selection_suppressed();
        self.bus.poll(now_ms);
        let mut changed = Vec::new();
        for (id, component) in &mut self.instances {
            let response = component.poll(now_ms);
            if !response.is_empty() {
                changed.push((*id, response));
            }
        }
        changed.sort_by_key(|(id, _)| *id);
        for (_, response) in &changed {
            self.apply_selection(response.text_selection);
        }
        Polled {
            changed,
            text_selection: self.selection_change(was),
        }
    }

    fn apply_selection(&mut self, request: Option<TextSelection>) {
        match request {
            Some(TextSelection::Suppress) => {
                self.bus.suppress_text_selection();
            }
            Some(TextSelection::Restore) => {
                self.bus.release_text_selection();
            }
            None => {}
        }
    }

    fn selection_change(&self, was: bool) -> Option<TextSelection> {
        match (was, self.bus.text_selection_suppressed()) {
            (false, true) => Some(TextSelection::Suppress),
            (true, false) => Some(TextSelection::Restore),
            _ => None,
        }
    }
}

impl<E: Element, T: Clone> Document<E, T> {
    /// Render a mounted component.
    #[must_use]
    pub fn render(&self, id: InstanceId) -> Option<Rendered<T>> {
        self.instances.get(&id).map(Component::render)
    }
}
