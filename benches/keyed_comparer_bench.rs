//! Keyed comparer benchmark.
//!
//! Measures equality and hashing throughput for scalar and string keys,
//! including the absent-key sentinel path.

use bykey::comparer::KeyedComparer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn benchmark_equals(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("keyed_comparer_equals");

    let by_id = KeyedComparer::new(|pair: &(u64, String)| pair.0);
    let left = (42_u64, String::from("left"));
    let right = (42_u64, String::from("right"));

    group.bench_function("scalar_key", |bencher| {
        bencher.iter(|| by_id.equivalent(black_box(&left), black_box(&right)));
    });

    let by_name = KeyedComparer::new(|pair: &(u64, String)| pair.1.clone());
    group.bench_function("string_key", |bencher| {
        bencher.iter(|| by_name.equivalent(black_box(&left), black_box(&right)));
    });

    group.finish();
}

fn benchmark_hash_value(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("keyed_comparer_hash_value");

    let by_id = KeyedComparer::new(|pair: &(u64, String)| pair.0);
    let element = (42_u64, String::from("element"));

    group.bench_function("present_key", |bencher| {
        bencher.iter(|| by_id.hash_value(black_box(Some(&element))));
    });

    let by_missing = KeyedComparer::new(|_: &(u64, String)| None::<u64>);
    group.bench_function("absent_key_sentinel", |bencher| {
        bencher.iter(|| by_missing.hash_value(black_box(Some(&element))));
    });

    group.finish();
}

criterion_group!(benches, benchmark_equals, benchmark_hash_value);
criterion_main!(benches);
