// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use overstory_interactive::{ComponentBuilder, Content, Document, InstanceId};
use understory_interactive::element::{ElementKind, StaticElement};
use understory_interactive::event::{InputEvent, MouseKind, TouchPhase, TouchPoint};

fn populated(instances: usize) -> (Document<StaticElement, ()>, Vec<InstanceId>) {
    let mut doc = Document::default();
    let ids = (0..instances)
        .map(|_| {
            let component = ComponentBuilder::new(Content::Static(()))
                .build(StaticElement(ElementKind::Button))
                .unwrap();
            doc.mount(component).0
        })
        .collect();
    (doc, ids)
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("document/dispatch");

    // Every dispatch shows the event to all other instances, so cost grows with the mount count.
    for instances in [1usize, 64, 1_024] {
        group.throughput(Throughput::Elements(instances as u64));
        group.bench_with_input(
            BenchmarkId::new("hover_sweep", instances),
            &instances,
            |b, &instances| {
                b.iter_batched(
                    || populated(instances),
                    |(mut doc, ids)| {
                        for (t, id) in ids.iter().enumerate() {
                            let t = t as u64 * 10;
                            let enter = InputEvent::mouse(MouseKind::Enter, t);
                            let leave = InputEvent::mouse(MouseKind::Leave, t + 5);
                            black_box(doc.dispatch(Some(*id), &enter));
                            black_box(doc.dispatch(Some(*id), &leave));
                        }
                        black_box(doc);
                    },
                    BatchSize::LargeInput,
                );
            },
        );

        group.bench_with_input(
            BenchmarkId::new("touch_fan_out", instances),
            &instances,
            |b, &instances| {
                b.iter_batched(
                    || populated(instances),
                    |(mut doc, ids)| {
                        let start = InputEvent::touch(
                            TouchPhase::Start,
                            [TouchPoint::new(1, Point::new(5.0, 5.0))],
                            1,
                            1,
                            0,
                        );
                        black_box(doc.dispatch(ids.first().copied(), &start));
                        black_box(doc.poll(750));
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
