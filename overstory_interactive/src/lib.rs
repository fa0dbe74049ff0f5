// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Interactive: interactive components on top of `understory_interactive`.
//!
//! A [`Component`] bundles one element's engine with its rendering
//! configuration: per-state [`StateStyles`](understory_interactive_style::StateStyles),
//! pass-through [`Props`], [`Content`] that may be a function of the state, and
//! caller [`Handlers`]. A [`Document`] owns the shared input bus and every
//! mounted component and routes each platform event through them.
//!
//! ```rust
//! use overstory_interactive::{ComponentBuilder, Content, Document, Handlers};
//! use understory_interactive::element::{ElementKind, StaticElement};
//! use understory_interactive::event::{InputEvent, MouseKind};
//! use understory_interactive::bus::Lifecycle;
//!
//! let mut document = Document::default();
//! let button = ComponentBuilder::new(Content::from_fn(|state| {
//!         if state.hover { "hovered" } else { "idle" }
//!     }))
//!     .handlers(Handlers::new().on_click(|_| {}))
//!     .build(StaticElement(ElementKind::Button))
//!     .unwrap();
//! let (id, lifecycle) = document.mount(button);
//! assert_eq!(lifecycle, Lifecycle::Started);
//!
//! let dispatched = document.dispatch(Some(id), &InputEvent::mouse(MouseKind::Enter, 0));
//! assert!(dispatched.response.change.is_some());
//!
//! let rendered = document.render(id).unwrap();
//! assert_eq!(rendered.content, "hovered");
//! assert_eq!(rendered.class_name, "hover");
//! assert_eq!(rendered.style.get("cursor"), Some("pointer"));
//! ```

mod component;
mod document;
mod props;

pub use component::{Component, ComponentBuilder, Rendered};
pub use document::{Dispatched, Document, InstanceId, Polled};
pub use props::{ClickHandler, Content, EventHandler, Handlers, Props, TapHandler};
