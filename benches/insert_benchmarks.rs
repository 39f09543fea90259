//! Benchmarks for `TopN` insertion.
//!
//! Compares the ordered (`BTreeMap`) backend against the linear-scan
//! (`FxHashMap`) backend across capacities and key distributions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use topn::prelude::*;

const STREAM_LEN: usize = 50_000;

// Keys drawn uniformly from a wide range: evictions are frequent early, rare later
fn uniform_stream(seed: u64) -> Vec<(u64, u32)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..STREAM_LEN)
        .map(|i| (rng.gen_range(0..1_000_000), i as u32))
        .collect()
}

// Increasing keys: every new key displaces the threshold under Top (worst case)
fn ascending_stream() -> Vec<(u64, u32)> {
    (0..STREAM_LEN).map(|i| (i as u64, i as u32)).collect()
}

// Few distinct keys: mostly appends to existing entries
fn repeated_stream(seed: u64) -> Vec<(u64, u32)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..STREAM_LEN)
        .map(|i| (rng.gen_range(0..64), i as u32))
        .collect()
}

fn bench_stream(c: &mut Criterion, name: &str, stream: &[(u64, u32)]) {
    let mut group = c.benchmark_group(name);
    group.throughput(Throughput::Elements(stream.len() as u64));

    for capacity in [10i64, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("ordered", capacity), &capacity, |b, &cap| {
            b.iter(|| {
                let mut topn: TopN<u64, u32> = TopN::new(cap, Direction::Top).unwrap();
                for &(key, value) in stream {
                    black_box(topn.insert(key, value));
                }
                black_box(topn.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("scan", capacity), &capacity, |b, &cap| {
            b.iter(|| {
                let mut topn: ScanTopN<u64, u32> =
                    TopN::with_store(cap, Direction::Top, ScanStore::with_capacity(cap as usize))
                        .unwrap();
                for &(key, value) in stream {
                    black_box(topn.insert(key, value));
                }
                black_box(topn.len())
            });
        });
    }

    group.finish();
}

fn bench_uniform(c: &mut Criterion) {
    bench_stream(c, "insert/uniform", &uniform_stream(42));
}

fn bench_ascending(c: &mut Criterion) {
    bench_stream(c, "insert/ascending", &ascending_stream());
}

fn bench_repeated(c: &mut Criterion) {
    bench_stream(c, "insert/repeated", &repeated_stream(7));
}

// Benchmark: lookup on a full container
fn bench_find(c: &mut Criterion) {
    let stream = uniform_stream(99);
    let topn: TopN<u64, u32> =
        TopN::from_iter_with(1000, Direction::Top, stream.iter().copied()).unwrap();
    let probes: Vec<u64> = stream.iter().take(1000).map(|(key, _)| *key).collect();

    c.bench_function("find/ordered_1000", |b| {
        b.iter(|| {
            for key in &probes {
                black_box(topn.find(key));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_uniform,
    bench_ascending,
    bench_repeated,
    bench_find
);
criterion_main!(benches);
