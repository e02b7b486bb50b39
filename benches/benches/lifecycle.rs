// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use understory_modifier::hub::{LifecycleHub, on_first_appear};
use understory_modifier::lifecycle::LifecycleEvent;

fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("lifecycle/emit");

    // One appear per instance after attaching a first-appear gate to each,
    // roughly what a list does when it scrolls a page of rows into view.
    for rows in [16_u32, 256, 4_096] {
        group.bench_with_input(BenchmarkId::new("first_appear", rows), &rows, |b, &rows| {
            b.iter_batched(
                || {
                    let mut hub = LifecycleHub::new();
                    for row in 0..rows {
                        on_first_appear(&mut hub, row, Some(|| {}));
                    }
                    hub
                },
                |mut hub| {
                    for row in 0..rows {
                        black_box(hub.emit(&row, LifecycleEvent::Appear));
                    }
                    hub
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_emit);
criterion_main!(benches);
