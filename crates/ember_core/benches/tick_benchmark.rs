//! Benchmark for the generation-and-eviction step.
//!
//! Run with: cargo bench --package ember_core --bench tick_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use ember_core::{EmitterConfig, EmitterState};

fn benchmark_tick_filling(c: &mut Criterion) {
    let config = EmitterConfig::default().with_seed(1);

    c.bench_function("tick_filling_buffer", |b| {
        b.iter_batched(
            || EmitterState::new(&config).expect("valid config"),
            |mut state| {
                for _ in 0..config.capacity {
                    black_box(state.tick());
                }
                state
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn benchmark_tick_at_capacity(c: &mut Criterion) {
    let config = EmitterConfig::default().with_seed(2);
    let mut state = EmitterState::new(&config).expect("valid config");
    for _ in 0..config.capacity {
        state.tick();
    }

    let mut group = c.benchmark_group("tick_at_capacity");
    group.throughput(Throughput::Elements(1));
    group.bench_function("evicting_tick", |b| {
        b.iter(|| black_box(state.tick()));
    });
    group.finish();
}

fn benchmark_snapshot(c: &mut Criterion) {
    let config = EmitterConfig::default().with_seed(3);
    let mut state = EmitterState::new(&config).expect("valid config");
    for _ in 0..config.capacity {
        state.tick();
    }

    c.bench_function("snapshot_full_buffer", |b| {
        b.iter(|| black_box(state.particles()));
    });
}

criterion_group!(
    benches,
    benchmark_tick_filling,
    benchmark_tick_at_capacity,
    benchmark_snapshot
);
criterion_main!(benches);
