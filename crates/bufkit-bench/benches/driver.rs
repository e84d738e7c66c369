//! Criterion benchmark for the full reference driver scenario.

use std::hint::black_box;

use bufkit_bench::run_driver;
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_driver(c: &mut Criterion) {
    c.bench_function("driver", |b| {
        b.iter(|| {
            let report = run_driver().unwrap();
            black_box(&report);
        });
    });
}

criterion_group!(benches, bench_driver);
criterion_main!(benches);
