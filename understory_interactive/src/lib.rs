// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_interactive --heading-base-level=0

//! Understory Interactive: hover, active and focus state normalised across input devices.
//!
//! Platforms report interaction through several overlapping event streams.
//! A finger tap produces touch events, then pointer events, then compatibility
//! mouse events and a click; a mouse press produces pointer and mouse events;
//! focus arrives with no device at all. This crate folds all of that into one
//! [`InteractiveState`] per element with three independent axes:
//!
//! - `hover`: a mouse or pen is over the element;
//! - `active`: the element is pressed, tagged `mouseActive`, `touchActive` or `keyActive`;
//! - `focus`: the element has focus, tagged `focusFromMouse`, `focusFromTouch` or `focusFromKey`.
//!
//! ## Modules
//!
//! - [`state`]: the state value and the transition reducer
//! - [`modality`]: classifying which device produced an event ([`event_from`])
//! - [`router`]: the event/modality routing table
//! - [`tap`]: single and multi-finger tap recognition
//! - [`keys`] and [`focus`]: held activation keys and focus provenance
//! - [`engine`]: [`Interactive`], one element's engine, built with [`InteractiveBuilder`]
//! - [`bus`]: the document-wide [`InputBus`] shared by all instances
//! - [`timing`]: tunable constants and host-driven deadlines
//!
//! ## Usage
//!
//! 1) Keep one [`InputBus`] per document and call [`InputBus::record`] for
//!    every event before delivering it to any element.
//! 2) Build an [`Interactive`] per element and call [`Interactive::handle`] with
//!    the events that target it and the bus's recent-input record.
//! 3) Re-render when a [`Response`](engine::Response) carries a change. Arm a
//!    timer for [`Interactive::next_deadline`] and call [`Interactive::poll`]
//!    when it fires.
//!
//! ```rust
//! use understory_interactive::{InputBus, InteractiveBuilder, event_from};
//! use understory_interactive::element::{ElementKind, StaticElement};
//! use understory_interactive::event::{InputEvent, TouchPhase, TouchPoint};
//! use understory_interactive::modality::InputModality;
//! use understory_interactive::state::ActiveKind;
//! use understory_interactive::tap::TapCount;
//! use kurbo::Point;
//!
//! let mut bus = InputBus::default();
//! let mut link = InteractiveBuilder::new()
//!     .build(StaticElement(ElementKind::Anchor { has_href: true }))
//!     .unwrap();
//!
//! let start = InputEvent::touch(TouchPhase::Start, [TouchPoint::new(0, Point::new(10.0, 10.0))], 1, 1, 0);
//! assert_eq!(bus.record(&start), InputModality::Touch);
//! link.handle(&start, bus.recent());
//! assert_eq!(link.state().active, Some(ActiveKind::Touch));
//! assert!(!link.state().hover);
//!
//! let end = InputEvent::touch(TouchPhase::End, [TouchPoint::new(0, Point::new(12.0, 11.0))], 0, 0, 90);
//! bus.record(&end);
//! let response = link.handle(&end, bus.recent());
//! assert_eq!(response.tap, Some(TapCount::One));
//! assert!(response.click);
//! assert_eq!(link.state().active, None);
//! assert_eq!(event_from(&end, bus.recent()), InputModality::Touch);
//! ```
//!
//! ## Re-entrancy
//!
//! The engine moves focus itself in a few situations (a press on an unfocused
//! element, disabling a focused one, forced state). The platform answers those
//! calls with `focus`/`blur` events; hosts must queue them and deliver them
//! after the current call returns. See [`element`].
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod bus;
pub mod element;
pub mod engine;
pub mod error;
pub mod event;
pub mod focus;
pub mod keys;
pub mod modality;
pub mod router;
pub mod state;
pub mod tap;
pub mod timing;

pub use bus::InputBus;
pub use element::{Element, ElementKind};
pub use engine::{Interactive, InteractiveBuilder};
pub use error::ConfigError;
pub use modality::{InputModality, event_from};
pub use state::{InteractiveState, StateChange};
