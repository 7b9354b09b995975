use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fluent_collection::{Collection, Key, Value};
use ordermap::OrderMap;

fn bench_build(c: &mut Criterion) {
    let n = 64i64;
    let mut group = c.benchmark_group("Build (64)");

    group.bench_function("OrderMap<Key, Value>", |b| {
        b.iter(|| {
            let mut m: OrderMap<Key, Value> = OrderMap::new();
            for i in 0..n {
                m.insert(Key::Index(black_box(i as u64)), Value::Int(black_box(i)));
            }
            m
        })
    });

    group.bench_function("Collection::add", |b| {
        b.iter(|| {
            let mut coll = Collection::new();
            for i in 0..n {
                coll.add(black_box(i));
            }
            coll
        })
    });
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let n = 64i64;
    let coll: Collection = (0..n).map(Value::Int).collect();
    let raw: OrderMap<Key, Value> = (0..n)
        .map(|i| (Key::Index(i as u64), Value::Int(i)))
        .collect();

    let mut group = c.benchmark_group("Filter+Map (64)");

    group.bench_function("OrderMap manual loop", |b| {
        b.iter(|| {
            let mut out: OrderMap<Key, Value> = OrderMap::new();
            for (k, v) in &raw {
                if let Value::Int(i) = v {
                    if i % 2 == 0 {
                        out.insert(k.clone(), Value::Int(i * 10));
                    }
                }
            }
            black_box(out)
        })
    });

    group.bench_function("Collection::filter().map()", |b| {
        b.iter(|| {
            black_box(
                coll.filter(|v| v.as_i64().unwrap() % 2 == 0)
                    .map(|v| Value::Int(v.as_i64().unwrap() * 10)),
            )
        })
    });
    group.finish();
}

fn bench_diff(c: &mut Criterion) {
    let coll: Collection = (0..64i64).map(Value::Int).collect();
    let other: Collection = (0..32i64).map(|i| Value::Int(i * 2)).collect();

    let mut group = c.benchmark_group("Diff (64 vs 32)");
    group.bench_function("Collection::diff", |b| {
        b.iter(|| black_box(coll.diff(black_box(&other))))
    });
    group.bench_function("Collection::diff_keys", |b| {
        b.iter(|| black_box(coll.diff_keys(black_box(&other))))
    });
    group.finish();
}

fn bench_sorted(c: &mut Criterion) {
    // worst case for a stable sort: strictly descending input
    let coll: Collection = (0..64i64).rev().map(Value::Int).collect();
    let values: Vec<i64> = (0..64i64).rev().collect();

    let mut group = c.benchmark_group("Sort (64)");

    group.bench_function("Vec::sort baseline", |b| {
        b.iter(|| {
            let mut v = values.clone();
            v.sort();
            black_box(v)
        })
    });

    group.bench_function("Collection::sorted", |b| {
        b.iter(|| black_box(coll.sorted()))
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_pipeline, bench_diff, bench_sorted);
criterion_main!(benches);
