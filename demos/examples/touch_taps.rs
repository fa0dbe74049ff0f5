// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch on two cards: taps, a scroll, and extended touch-active.
//!
//! The first card uses the default touch-active behaviour and ends it when the
//! browser's compatibility mouse events arrive. The second keeps `touchActive`
//! until the finger lifts and suppresses document text selection meanwhile.
//!
//! Run:
//! - `cargo run -p understory_interactive_demos --example touch_taps`

use kurbo::Point;
use overstory_interactive::{ComponentBuilder, Content, Handlers};
use understory_interactive::InteractiveBuilder;
use understory_interactive::element::ElementKind;
use understory_interactive::event::{InputEvent, MouseKind, TouchPhase, TouchPoint};
use understory_interactive_demos::{DemoHost, init_logging};

fn finger(phase: TouchPhase, id: u64, x: f64, y: f64, on_target: usize, time: u64) -> InputEvent {
    InputEvent::touch(
        phase,
        [TouchPoint::new(id, Point::new(x, y))],
        on_target,
        on_target,
        time,
    )
}

fn main() {
    init_logging();

    let mut host = DemoHost::default();
    let card = |host: &DemoHost<String>, extended: bool| {
        ComponentBuilder::new(Content::from_fn(|state| format!("{state}")))
            .interactive(InteractiveBuilder::new().extended_touch_active(extended))
            .handlers(
                Handlers::new()
                    .on_click(|modality| println!("          click ({})", modality.as_str()))
                    .on_tap_two(|| println!("          two-finger tap")),
            )
            .build(host.element(ElementKind::Other(String::from("div"))))
            .unwrap()
    };
    let plain = card(&host, false);
    let plain = host.mount(plain);
    let extended = card(&host, true);
    let extended = host.mount(extended);

    println!("-- single tap, then the browser's compatibility mouse events");
    host.send("touchstart", Some(plain), finger(TouchPhase::Start, 1, 50.0, 50.0, 1, 0));
    host.send("touchend", Some(plain), finger(TouchPhase::End, 1, 52.0, 51.0, 0, 90));
    host.send("mouseenter", Some(plain), InputEvent::mouse(MouseKind::Enter, 95));
    host.send("click", Some(plain), InputEvent::mouse(MouseKind::Click, 96));
    host.show(plain);

    println!("-- a scroll is not a tap");
    host.send("touchstart", Some(plain), finger(TouchPhase::Start, 2, 50.0, 50.0, 1, 2_000));
    host.send("touchmove", Some(plain), finger(TouchPhase::Move, 2, 50.0, 140.0, 1, 2_050));
    host.send("touchend", Some(plain), finger(TouchPhase::End, 2, 50.0, 180.0, 0, 2_120));
    host.advance(2_750);

    println!("-- two-finger tap");
    host.send("touchstart", Some(plain), finger(TouchPhase::Start, 3, 40.0, 40.0, 1, 4_000));
    host.send("touchstart", Some(plain), finger(TouchPhase::Start, 4, 80.0, 40.0, 2, 4_020));
    host.send("touchend", Some(plain), finger(TouchPhase::End, 3, 40.0, 40.0, 1, 4_100));
    host.send("touchend", Some(plain), finger(TouchPhase::End, 4, 80.0, 40.0, 0, 4_110));

    println!("-- extended touch-active holds until the finger lifts");
    host.send("touchstart", Some(extended), finger(TouchPhase::Start, 5, 300.0, 50.0, 1, 6_000));
    host.show(extended);
    host.send("mouseenter", Some(extended), InputEvent::mouse(MouseKind::Enter, 6_010));
    host.advance(6_900);
    host.send("touchend", Some(extended), finger(TouchPhase::End, 5, 300.0, 50.0, 0, 7_500));
    if let Some(deadline) = host.document().next_deadline() {
        host.advance(deadline);
    }
    host.show(extended);
}
