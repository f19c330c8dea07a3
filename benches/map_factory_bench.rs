//! Benchmark for pre-sized factory maps vs default-sized standard maps.
//!
//! Measures what pre-sizing saves when filling a map with a known number
//! of entries, and what `extend` costs compared to clone-and-insert.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use micromaps::factory::{extend, fixed_map, sized_unordered_map};
use micromaps::hasher::UnorderedMap;
use std::collections::HashMap;
use std::hint::black_box;

// =============================================================================
// fill Benchmark
// =============================================================================

fn benchmark_fill(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fill");

    for size in [100, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("sized_unordered_map", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut map: UnorderedMap<usize, usize> = sized_unordered_map(size);
                    for index in 0..size {
                        map.insert(black_box(index), black_box(index * 2));
                    }
                    black_box(map)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("HashMap::new", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut map = HashMap::new();
                for index in 0..size {
                    map.insert(black_box(index), black_box(index * 2));
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

// =============================================================================
// extend Benchmark
// =============================================================================

fn benchmark_extend(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("extend");

    for size in [100, 1_000, 10_000] {
        let original = fixed_map(0, 0, (1..size).map(|index| (index, index)));

        group.bench_with_input(BenchmarkId::new("extend", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let map = extend(&original, black_box(size), 0, [(size + 1, 1)]);
                black_box(map)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("clone_and_insert", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut map = original.clone();
                    map.insert(black_box(size), 0);
                    map.insert(size + 1, 1);
                    black_box(map)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(benches, benchmark_fill, benchmark_extend);

criterion_main!(benches);
