// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the headless interaction demos.
//!
//! [`DemoHost`] stands in for a browser: it owns a [`Document`], queues the
//! focus and blur events that imperative focus calls trigger, and prints what
//! each component renders after every step.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::rc::Rc;

use overstory_interactive::{Component, Document, InstanceId};
use understory_interactive::element::{Element, ElementKind};
use understory_interactive::event::{EventKind, InputEvent};
use understory_interactive::state::InteractiveState;

type FocusQueue = Rc<RefCell<VecDeque<(InstanceId, EventKind)>>>;

/// An element whose imperative focus and blur post events back to the host.
#[derive(Debug)]
pub struct DemoElement {
    kind: ElementKind,
    id: Option<InstanceId>,
    queue: FocusQueue,
}

impl DemoElement {
    /// Set by [`DemoHost::mount`] once the instance id is known.
    fn bind(&mut self, id: InstanceId) {
        self.id = Some(id);
    }

    fn post(&self, kind: EventKind) -> bool {
        match self.id {
            Some(id) => {
                self.queue.borrow_mut().push_back((id, kind));
                true
            }
            None => false,
        }
    }
}

impl Element for DemoElement {
    fn kind(&self) -> ElementKind {
        self.kind.clone()
    }

    fn focus(&mut self) -> bool {
        self.post(EventKind::Focus)
    }

    fn blur(&mut self) -> bool {
        self.post(EventKind::Blur)
    }
}

/// A stand-in browser driving one document.
#[derive(Debug)]
pub struct DemoHost<T> {
    document: Document<DemoElement, T>,
    queue: FocusQueue,
    focused: Option<InstanceId>,
}

impl<T> Default for DemoHost<T> {
    fn default() -> Self {
        Self {
            document: Document::default(),
            queue: FocusQueue::default(),
            focused: None,
        }
    }
}

impl<T: Clone + Debug> DemoHost<T> {
    /// A fresh element of `kind` wired to this host's focus queue.
    pub fn element(&self, kind: ElementKind) -> DemoElement {
        DemoElement {
            kind,
            id: None,
            queue: Rc::clone(&self.queue),
        }
    }

    /// Mount a component built around an element from [`Self::element`].
    pub fn mount(&mut self, component: Component<DemoElement, T>) -> InstanceId {
        let (id, lifecycle) = self.document.mount(component);
        log::info!("mounted {} ({lifecycle:?})", id.get());
        if let Some(component) = self.document.get_mut(id) {
            component.element_mut().bind(id);
        }
        id
    }

    /// The document.
    pub fn document(&mut self) -> &mut Document<DemoElement, T> {
        &mut self.document
    }

    /// Dispatch `event` to `target`, then deliver any focus changes it caused.
    pub fn send(&mut self, label: &str, target: Option<InstanceId>, event: InputEvent) {
        let time = event.time_ms;
        self.deliver(label, target, &event);
        self.drain(time);
    }

    /// Force `id` into `state`, then deliver any focus changes it caused.
    pub fn force_state(&mut self, id: InstanceId, state: InteractiveState, now_ms: u64) {
        if let Some(component) = self.document.get_mut(id) {
            if let Some(change) = component.force_state(state, now_ms).change {
                println!("{now_ms:>6} ms  forced       #{}: {}", id.get(), change.state);
            }
        }
        self.drain(now_ms);
    }

    /// Enable or disable `id`, then deliver any focus changes it caused.
    pub fn set_disabled(&mut self, id: InstanceId, disabled: bool, now_ms: u64) {
        if let Some(dispatched) = self.document.set_disabled(id, disabled, now_ms) {
            if let Some(change) = dispatched.response.change {
                println!("{now_ms:>6} ms  disabled={disabled:<5} #{}: {}", id.get(), change.state);
            }
        }
        self.drain(now_ms);
    }

    /// Advance the clock to `now_ms`, firing due deadlines.
    pub fn advance(&mut self, now_ms: u64) {
        let polled = self.document.poll(now_ms);
        for (id, response) in &polled.changed {
            if let Some(change) = response.change {
                println!("{now_ms:>6} ms  timer        #{}: {}", id.get(), change.state);
            }
        }
        if let Some(selection) = polled.text_selection {
            println!("{now_ms:>6} ms  document text selection: {selection:?}");
        }
    }

    /// Print what `id` renders right now.
    pub fn show(&self, id: InstanceId) {
        if let Some(rendered) = self.document.render(id) {
            println!(
                "          render #{}: class=\"{}\" style=\"{}\" content={:?}",
                id.get(),
                rendered.class_name,
                rendered.style,
                rendered.content
            );
        }
    }

    fn deliver(&mut self, label: &str, target: Option<InstanceId>, event: &InputEvent) {
        let dispatched = self.document.dispatch(target, event);
        let response = dispatched.response;
        let who = target.map_or_else(|| String::from("document"), |id| format!("#{}", id.get()));
        let mut line = format!("{:>6} ms  {label:<12} {who}", event.time_ms);
        if let Some(change) = response.change {
            line.push_str(&format!(": {}", change.state));
        }
        if let Some(count) = response.tap {
            line.push_str(&format!(" [{}-finger tap]", count.fingers()));
        }
        if response.click {
            line.push_str(" [click]");
        }
        println!("{line}");
        if let Some(selection) = dispatched.text_selection {
            println!("          document text selection: {selection:?}");
        }
    }

    fn drain(&mut self, time: u64) {
        loop {
            let Some((id, kind)) = self.queue.borrow_mut().pop_front() else {
                break;
            };
            // Moving focus blurs whatever held it.
            if matches!(kind, EventKind::Focus) {
                if let Some(previous) = self.focused.filter(|previous| *previous != id) {
                    self.deliver("blur", Some(previous), &InputEvent::blur(time));
                }
                self.focused = Some(id);
            } else if self.focused == Some(id) {
                self.focused = None;
            }
            let label = match kind {
                EventKind::Focus => "focus",
                _ => "blur",
            };
            self.deliver(label, Some(id), &InputEvent::new(kind, time));
        }
    }
}

/// Install `env_logger`, defaulting to debug output for the interaction crates.
pub fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("understory_interactive=debug"),
    )
    .init();
}
