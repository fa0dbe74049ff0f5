// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use understory_interactive::state::{ActiveKind, FocusKind, InteractiveState};
use understory_interactive_style::{
    ProjectionInput, StateStyles, StateStylesBuilder, StyleMap, StyleSlot, project,
};

fn full_table() -> StateStyles {
    let mut builder = StateStylesBuilder::new();
    for slot in StyleSlot::ALL {
        builder = builder.class_name(slot, format!("is-{}", slot.as_str())).style(
            slot,
            StyleMap::new()
                .with("outline", slot.as_str())
                .with("color", "black"),
        );
    }
    builder.build().unwrap()
}

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("style/project");
    let base = StyleMap::new()
        .with("padding", "4px")
        .with("border", "1px solid gray");

    let states = [
        ("idle", InteractiveState::INITIAL),
        (
            "hover",
            InteractiveState {
                hover: true,
                ..InteractiveState::INITIAL
            },
        ),
        (
            "all",
            InteractiveState {
                hover: true,
                active: Some(ActiveKind::Key),
                focus: Some(FocusKind::Key),
            },
        ),
    ];

    for (table_name, styles) in [("empty", StateStyles::default()), ("full", full_table())] {
        for (state_name, state) in states {
            let input = ProjectionInput {
                state,
                clickable: true,
                class_name: Some("button primary"),
                style: Some(&base),
                ..ProjectionInput::default()
            };
            group.bench_with_input(
                BenchmarkId::new(table_name, state_name),
                &input,
                |b, input| {
                    b.iter(|| black_box(project(&styles, black_box(input))));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_project);
criterion_main!(benches);
