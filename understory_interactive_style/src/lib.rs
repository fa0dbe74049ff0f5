// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_interactive_style --heading-base-level=0

//! Understory Interactive Style: class names and inline styles for interaction state.
//!
//! Given an [`InteractiveState`](understory_interactive::InteractiveState), a
//! disabled flag and a [`StateStyles`] table, [`project`] produces one merged
//! [`ClassList`] and one merged [`StyleMap`]. The precedence chain is
//!
//! **base → defaults → disabled | hover → active → active variant → focus → focus variant**
//!
//! where a disabled instance stops after its `disabled` slot: state keeps
//! updating underneath, it is just not rendered.
//!
//! ```rust
//! use understory_interactive::state::{FocusKind, InteractiveState};
//! use understory_interactive_style::{ProjectionInput, StateStylesBuilder, StyleMap, StyleSlot, project};
//!
//! let styles = StateStylesBuilder::new()
//!     .style(StyleSlot::Focus, StyleMap::new().with("outline", "none"))
//!     .style(StyleSlot::FocusFromKey, StyleMap::new().with("outline", "2px solid royalblue"))
//!     .build()
//!     .unwrap();
//!
//! let mouse_focus = ProjectionInput {
//!     state: InteractiveState { focus: Some(FocusKind::Mouse), ..InteractiveState::INITIAL },
//!     ..ProjectionInput::default()
//! };
//! assert_eq!(project(&styles, &mouse_focus).style.get("outline"), Some("none"));
//!
//! let key_focus = ProjectionInput {
//!     state: InteractiveState { focus: Some(FocusKind::Key), ..InteractiveState::INITIAL },
//!     ..ProjectionInput::default()
//! };
//! assert_eq!(
//!     project(&styles, &key_focus).style.get("outline"),
//!     Some("2px solid royalblue")
//! );
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod class_list;
mod projection;
mod slot;
mod state_styles;
mod style_map;

pub use class_list::ClassList;
pub use projection::{Projection, ProjectionInput, project};
pub use slot::StyleSlot;
pub use state_styles::{StateStyles, StateStylesBuilder};
pub use style_map::StyleMap;
