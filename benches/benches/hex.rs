// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_color::{Color, HexLayout};

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex/decode");
    group.throughput(Throughput::Elements(1));

    for input in ["#FAB", "#FFAABB", "#11FFAACC", "  ff-aa-bb  ", "#12345"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| black_box(Color::from_hex(black_box(input))));
        });
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex/encode");
    let color = Color::new(0.2, 0.4, 0.6, 0.8);

    for layout in [HexLayout::Rgb, HexLayout::Rgba, HexLayout::Argb] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{layout:?}")),
            &layout,
            |b, &layout| {
                b.iter(|| black_box(black_box(color).to_hex(layout)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_decode, bench_encode);
criterion_main!(benches);
