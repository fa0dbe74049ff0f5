// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mouse and keyboard on a single button.
//!
//! Hover, press and release with the mouse, then tab in and hold Space. The
//! focus style differs by provenance: a mouse press focuses with `focusFromMouse`
//! and suppresses the outline, the keyboard brings it back.
//!
//! Run:
//! - `cargo run -p understory_interactive_demos --example hover_press`

use overstory_interactive::{ComponentBuilder, Content, Handlers};
use ui_events::keyboard::{Key, KeyState, NamedKey};
use understory_interactive::element::ElementKind;
use understory_interactive::event::{InputEvent, MouseKind};
use understory_interactive_demos::{DemoHost, init_logging};
use understory_interactive_style::{StateStylesBuilder, StyleMap, StyleSlot};

fn main() {
    init_logging();

    let styles = StateStylesBuilder::new()
        .style(StyleSlot::Hover, StyleMap::new().with("color", "crimson"))
        .style(StyleSlot::Active, StyleMap::new().with("color", "darkred"))
        .style(StyleSlot::FocusFromMouse, StyleMap::new().with("outline", "none"))
        .style(
            StyleSlot::FocusFromKey,
            StyleMap::new().with("outline", "2px solid royalblue"),
        )
        .build()
        .unwrap();

    let mut host = DemoHost::default();
    let button = ComponentBuilder::new(Content::from_fn(|state| {
        if state.active.is_some() {
            "pressed"
        } else if state.hover {
            "hovered"
        } else {
            "idle"
        }
    }))
    .styles(styles)
    .handlers(Handlers::new().on_click(|modality| {
        println!("          clicked by {}", modality.as_str());
    }))
    .build(host.element(ElementKind::Button))
    .unwrap();
    let id = host.mount(button);

    host.send("mouseenter", Some(id), InputEvent::mouse(MouseKind::Enter, 0));
    host.show(id);
    host.send("mousedown", Some(id), InputEvent::mouse(MouseKind::Down, 120));
    host.show(id);
    host.send("mouseup", Some(id), InputEvent::mouse(MouseKind::Up, 210));
    host.send("click", Some(id), InputEvent::mouse(MouseKind::Click, 211));
    host.send("mouseleave", Some(id), InputEvent::mouse(MouseKind::Leave, 400));
    host.show(id);

    host.send("blur", Some(id), InputEvent::blur(1_000));
    host.send(
        "keydown",
        None,
        InputEvent::key(KeyState::Down, Key::Named(NamedKey::Tab), 1_500),
    );
    host.send("focus", Some(id), InputEvent::focus(1_501));
    host.show(id);
    let space = || Key::Character(" ".into());
    host.send("keydown", Some(id), InputEvent::key(KeyState::Down, space(), 1_800));
    host.show(id);
    host.send("keyup", Some(id), InputEvent::key(KeyState::Up, space(), 1_900));
    host.show(id);
}
