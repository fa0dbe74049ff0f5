// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Forced focus and disabling a focused input.
//!
//! Forcing focus from outside pushes it to the element with keyboard
//! provenance. Disabling the input while focused blurs it even on platforms that
//! never send `blur` for disabled elements.
//!
//! Run:
//! - `cargo run -p understory_interactive_demos --example disabled_focus`

use overstory_interactive::{ComponentBuilder, Content, Props};
use understory_interactive::element::ElementKind;
use understory_interactive::state::{FocusKind, InteractiveState};
use understory_interactive_demos::{DemoHost, init_logging};

fn main() {
    init_logging();

    let mut host = DemoHost::default();
    let input = ComponentBuilder::new(Content::Static("name"))
        .props(Props {
            tab_index: Some(0),
            ..Props::default()
        })
        .build(host.element(ElementKind::from_tag("input", Some("text"), false)))
        .unwrap();
    let id = host.mount(input);

    let forced = InteractiveState {
        focus: Some(FocusKind::Key),
        ..InteractiveState::INITIAL
    };
    host.force_state(id, forced, 0);
    host.show(id);

    host.set_disabled(id, true, 100);
    host.show(id);
}
