//! Benchmarks for parsing, comparing and sorting versions.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use semantic_version::SemanticVersion;

const INPUTS: &[&str] = &[
    "1.2.3",
    "10.20.30-RC.1",
    "0.0.1-prealpha",
    "2.0.0-beta.11",
    "4294967295.4294967295.4294967295",
];

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse", |b| {
        b.iter(|| {
            for input in INPUTS {
                black_box(SemanticVersion::parse(black_box(input)).unwrap());
            }
        })
    });
}

fn bench_compare(c: &mut Criterion) {
    let a: SemanticVersion = "1.0.0-alpha.1".parse().unwrap();
    let b: SemanticVersion = "1.0.0-RC.1".parse().unwrap();
    c.bench_function("compare_pre_release", |bench| {
        bench.iter(|| black_box(&a).compare_to(black_box(&b)))
    });
}

fn bench_sort(c: &mut Criterion) {
    let versions: Vec<SemanticVersion> = (0..256u32)
        .map(|i| {
            let pre = ["", "alpha", "beta.2", "rc.1", "nightly"][(i % 5) as usize];
            SemanticVersion::new(i % 3, i % 7, i % 11, pre).unwrap()
        })
        .collect();
    c.bench_function("sort_256", |b| {
        b.iter(|| {
            let mut v = versions.clone();
            v.sort();
            black_box(v)
        })
    });
}

criterion_group!(benches, bench_parse, bench_compare, bench_sort);
criterion_main!(benches);
