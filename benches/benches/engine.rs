// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use understory_interactive::InteractiveBuilder;
use understory_interactive::element::{ElementKind, StaticElement};
use understory_interactive::event::{InputEvent, MouseKind, TouchPhase, TouchPoint};
use understory_interactive::modality::{RecentInput, event_from};
use understory_interactive::router::{RouteContext, route};

fn mouse_cycle(start: u64) -> [InputEvent; 5] {
    [
        InputEvent::mouse(MouseKind::Enter, start),
        InputEvent::mouse(MouseKind::Down, start + 10),
        InputEvent::mouse(MouseKind::Up, start + 60),
        InputEvent::mouse(MouseKind::Click, start + 61),
        InputEvent::mouse(MouseKind::Leave, start + 200),
    ]
}

fn tap(start: u64) -> [InputEvent; 2] {
    [
        InputEvent::touch(
            TouchPhase::Start,
            [TouchPoint::new(1, Point::new(10.0, 10.0))],
            1,
            1,
            start,
        ),
        InputEvent::touch(
            TouchPhase::End,
            [TouchPoint::new(1, Point::new(12.0, 11.0))],
            0,
            0,
            start + 80,
        ),
    ]
}

fn bench_handle(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/handle");

    for cycles in [1usize, 16, 256] {
        let events: Vec<InputEvent> = (0..cycles as u64)
            .flat_map(|i| mouse_cycle(i * 1_000))
            .collect();
        group.throughput(Throughput::Elements(events.len() as u64));
        group.bench_with_input(BenchmarkId::new("mouse", cycles), &events, |b, events| {
            b.iter_batched(
                || {
                    let engine = InteractiveBuilder::new()
                        .build(StaticElement(ElementKind::Button))
                        .unwrap();
                    (engine, RecentInput::default())
                },
                |(mut engine, mut recent)| {
                    for event in events {
                        recent.record(event);
                        black_box(engine.handle(event, &recent));
                    }
                    black_box(engine);
                },
                BatchSize::SmallInput,
            );
        });

        // Taps are spaced past the recent-touch window so none is a compatibility event.
        let events: Vec<InputEvent> = (0..cycles as u64).flat_map(|i| tap(i * 1_000)).collect();
        group.throughput(Throughput::Elements(events.len() as u64));
        group.bench_with_input(BenchmarkId::new("tap", cycles), &events, |b, events| {
            b.iter_batched(
                || {
                    let engine = InteractiveBuilder::new()
                        .build(StaticElement(ElementKind::Button))
                        .unwrap();
                    (engine, RecentInput::default())
                },
                |(mut engine, mut recent)| {
                    for event in events {
                        recent.record(event);
                        black_box(engine.handle(event, &recent));
                        black_box(engine.poll(event.time_ms + 750));
                    }
                    black_box(engine);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/route");
    let recent = RecentInput::default();
    let cx = RouteContext::default();

    let events = mouse_cycle(0);
    group.throughput(Throughput::Elements(events.len() as u64));
    group.bench_function("mouse_cycle", |b| {
        b.iter(|| {
            for event in &events {
                let modality = event_from(event, &recent);
                black_box(route(black_box(event), modality, &cx));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_handle, bench_route);
criterion_main!(benches);
