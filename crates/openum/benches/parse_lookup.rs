// Parse and lookup benchmarks.
//
// Measures the hot paths integrations hit on every request: resolving text to
// a constant, wrapping unknown text, and name lookup.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use openum::Enumerable;

openum::enumerable! {
    pub struct Region {
        US_EAST = "us-east-1",
        US_WEST = "us-west-2",
        EU_CENTRAL = "eu-central-1",
        EU_WEST = "eu-west-1",
        AP_SOUTH = "ap-south-1",
        AP_NORTHEAST = "ap-northeast-1",
        SA_EAST = "sa-east-1",
        CA_CENTRAL = "ca-central-1",
    }
}

fn bench_parse(c: &mut Criterion) {
    // build the registry outside the measured loop
    let _ = Region::values();

    let mut group = c.benchmark_group("parse");
    group.bench_function("first_constant", |b| {
        b.iter(|| Region::parse(black_box("us-east-1")));
    });
    group.bench_function("last_constant", |b| {
        b.iter(|| Region::parse(black_box("ca-central-1")));
    });
    group.bench_function("unknown_value", |b| {
        b.iter(|| Region::parse(black_box("me-south-1")));
    });
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let unknown = Region::parse("me-south-1");

    let mut group = c.benchmark_group("lookup");
    group.bench_function("value_of", |b| {
        b.iter(|| Region::value_of(black_box("SA_EAST")));
    });
    group.bench_function("values", |b| {
        b.iter(Region::values);
    });
    group.bench_function("ordinal_memoized", |b| {
        b.iter(|| black_box(&unknown).ordinal());
    });
    group.finish();
}

fn bench_ordering(c: &mut Criterion) {
    let values: Vec<Region> = ["eu-west-1", "EU-west-1", "us-east-1", "af-south-1", "ca-central-1"]
        .into_iter()
        .map(Region::parse)
        .collect();

    c.bench_function("sort_mixed", |b| {
        b.iter(|| {
            let mut sorted = values.clone();
            sorted.sort();
            sorted
        });
    });
}

criterion_group!(benches, bench_parse, bench_lookup, bench_ordering);
criterion_main!(benches);
