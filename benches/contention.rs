//! Lock contention benchmarks: single-lock vs sharded store.
//!
//! Mirrors the measurement this library exists for: how throughput of the
//! two variants diverges as the number of concurrent writers grows.

use std::sync::{Arc, Barrier};
use std::thread;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use shard_kv::routing::hash_key;
use shard_kv::{ShardedStore, StandardStore, Store};

const ALPHABET: &str = "abcdefghijklmnopqrstuvxyzABCDEFGHIJKLMNOPQRSTUVXYZ1234567890";

fn bench_hash(c: &mut Criterion) {
    c.bench_function("hash_key", |b| b.iter(|| hash_key(std::hint::black_box("APAN"))));
}

fn serial_set(store: &dyn Store) {
    for chr in ALPHABET.chars() {
        let key = format!("{chr}{chr}");
        store.set(&key, ALPHABET);
    }
}

fn bench_serial_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("serial_set");

    let standard = StandardStore::new();
    group.bench_function("standard", |b| b.iter(|| serial_set(&standard)));

    let sharded = ShardedStore::new();
    group.bench_function("sharded", |b| b.iter(|| serial_set(&sharded)));

    group.finish();
}

/// All writer threads start together behind a barrier, each setting one
/// key per alphabet character, and the measurement covers the full join.
fn concurrent_set(store: &Arc<dyn Store>, writers: usize) {
    let barrier = Arc::new(Barrier::new(writers));
    let handles: Vec<_> = (0..writers)
        .map(|_| {
            let store = Arc::clone(store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for chr in ALPHABET.chars() {
                    let key = format!("{chr}{chr}");
                    store.set(&key, ALPHABET);
                }
            })
        })
        .collect();

    for handle in handles {
        let _ = handle.join();
    }
}

fn bench_concurrent_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_set");

    for writers in [10, 20, 40, 80] {
        let standard: Arc<dyn Store> = Arc::new(StandardStore::new());
        group.bench_with_input(
            BenchmarkId::new("standard", writers),
            &writers,
            |b, &writers| b.iter(|| concurrent_set(&standard, writers)),
        );

        let sharded: Arc<dyn Store> = Arc::new(ShardedStore::new());
        group.bench_with_input(
            BenchmarkId::new("sharded", writers),
            &writers,
            |b, &writers| b.iter(|| concurrent_set(&sharded, writers)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_hash, bench_serial_set, bench_concurrent_set);
criterion_main!(benches);
