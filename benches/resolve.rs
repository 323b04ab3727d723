// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use zonepick::format::parse_floor_plan;
use zonepick::layout::builtin::zone_table;
use zonepick::model::Location;

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Groups: `layout.resolve`, `format.floor_plan`
// - Case IDs: `small`, `medium`, `large`, `3fm`
fn benches_resolve(c: &mut Criterion) {
    let zones = zone_table();
    let mut group = c.benchmark_group("layout.resolve");

    for (name, count) in [("small", 500u64), ("medium", 5_000), ("large", 50_000)] {
        let locations = (0..count).map(fixtures::location_for).collect::<Vec<Location>>();
        group.throughput(Throughput::Elements(count));
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut acc = 0u64;
                for location in black_box(&locations) {
                    if let Ok(pos) = zones.resolve(location) {
                        acc = acc.wrapping_mul(131).wrapping_add((pos.col * 64 + pos.row) as u64);
                    }
                }
                black_box(acc)
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("format.floor_plan");
    let plan = fixtures::plan_for(&fixtures::locations(5_000)).to_string();
    group.throughput(Throughput::Bytes(plan.len() as u64));
    group.bench_function("3fm", |b| {
        b.iter(|| {
            let grid = parse_floor_plan(black_box(&plan)).expect("parse floor plan");
            black_box(fixtures::checksum_grid(&grid))
        })
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_resolve
}
criterion_main!(benches);
