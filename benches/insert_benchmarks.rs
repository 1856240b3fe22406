use arena_maps::{HashMap, OrderedMap};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::{BTreeMap, HashMap as StdHashMap};

const N: usize = 10_000;

// Sorted keys turn the unbalanced tree into a chain; keep that case small.
const N_ORDERED_TREE: usize = 2_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

// ─── Hash map benchmarks ────────────────────────────────────────────────────

fn bench_hash_insert_ordered(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_insert_ordered");

    group.bench_function(BenchmarkId::new("HashMap", N), |b| {
        b.iter(|| {
            let mut map = HashMap::new();
            for i in 0..N as i64 {
                map.insert(i, i);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("std::HashMap", N), |b| {
        b.iter(|| {
            let mut map = StdHashMap::new();
            for i in 0..N as i64 {
                map.insert(i, i);
            }
            map
        });
    });

    group.finish();
}

fn bench_hash_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("hash_insert_random");

    for bucket_count in [100, 1_000, 10_000] {
        group.bench_function(BenchmarkId::new("HashMap", bucket_count), |b| {
            b.iter(|| {
                let mut map = HashMap::with_bucket_count(bucket_count);
                for &k in &keys {
                    map.insert(k, k);
                }
                map
            });
        });
    }

    group.bench_function(BenchmarkId::new("std::HashMap", N), |b| {
        b.iter(|| {
            let mut map = StdHashMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.finish();
}

fn bench_hash_get_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let map: HashMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let mut group = c.benchmark_group("hash_get_random");

    group.bench_function(BenchmarkId::new("HashMap", N), |b| {
        b.iter(|| keys.iter().filter_map(|k| map.get(k)).count());
    });

    group.finish();
}

// ─── Ordered map benchmarks ─────────────────────────────────────────────────

fn bench_tree_insert_ordered(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_insert_ordered");

    group.bench_function(BenchmarkId::new("OrderedMap", N_ORDERED_TREE), |b| {
        b.iter(|| {
            let mut map = OrderedMap::new();
            for i in 0..N_ORDERED_TREE as i64 {
                map.insert(i, i);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N_ORDERED_TREE), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for i in 0..N_ORDERED_TREE as i64 {
                map.insert(i, i);
            }
            map
        });
    });

    group.finish();
}

fn bench_tree_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("tree_insert_random");

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter(|| {
            let mut map = OrderedMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.finish();
}

fn bench_tree_remove_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("tree_remove_random");

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter_batched(
            || keys.iter().map(|&k| (k, k)).collect::<OrderedMap<i64, i64>>(),
            |mut map| {
                for k in &keys {
                    let _ = map.remove(k);
                }
                map
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(hash_benches, bench_hash_insert_ordered, bench_hash_insert_random, bench_hash_get_random,);

criterion_group!(tree_benches, bench_tree_insert_ordered, bench_tree_insert_random, bench_tree_remove_random,);

criterion_main!(hash_benches, tree_benches);
