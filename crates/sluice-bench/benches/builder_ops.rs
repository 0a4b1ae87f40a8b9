//! Criterion micro-benchmarks for arena allocation, queue drains, and
//! round sizing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sluice_bench::transcript_words;
use sluice_builder::{BuilderArena, QueueKind, VerificationBuilder};
use sluice_core::log2_up;

/// Allocate-and-touch throughput for builder regions.
fn bench_arena_allocate(c: &mut Criterion) {
    c.bench_function("arena_allocate_64_builders", |b| {
        b.iter(|| {
            let mut arena = BuilderArena::new();
            for _ in 0..64 {
                let handle = VerificationBuilder::allocate(&mut arena);
                black_box(arena.region(handle));
            }
            black_box(arena.allocated())
        });
    });
}

/// Set-then-drain throughput for a single queue at protocol-typical sizes.
fn bench_queue_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_set_and_drain");
    for &size in &[16usize, 256, 4096] {
        let data = transcript_words(42, size);
        group.bench_function(format!("{size}_words"), |b| {
            b.iter(|| {
                let mut builder = VerificationBuilder::new();
                builder.set_queue(QueueKind::Challenge, &data);
                while let Ok(word) = builder.try_consume(QueueKind::Challenge) {
                    black_box(word);
                }
            });
        });
    }
    group.finish();
}

/// Round sizing over a sweep of table lengths.
fn bench_log2_up(c: &mut Criterion) {
    c.bench_function("log2_up_sweep", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for n in 1u64..=1024 {
                acc = acc.wrapping_add(log2_up(black_box(n)));
            }
            black_box(acc)
        });
    });
}

criterion_group!(
    benches,
    bench_arena_allocate,
    bench_queue_drain,
    bench_log2_up
);
criterion_main!(benches);
