//! Benchmarks for result view building.
//!
//! Run with: `cargo bench`
//!
//! Performance targets:
//! - `build()` of one page (20 results) < 20µs
//! - `build()` of 10K results < 5ms

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use storefront::{RawResult, ResultViewModelBuilder};

/// Generates a result set where every fourth record is missing fields.
fn make_results(count: usize) -> Vec<RawResult> {
    (0..count)
        .map(|i| {
            if i % 4 == 3 {
                RawResult::named(format!("Product {}", i))
            } else {
                RawResult {
                    name: Some(format!("Product {}", i)),
                    brand: Some("Acme".to_string()),
                    price: Some(i as f64 * 1.25),
                    image: Some(format!("http://img.example.com/{}.jpg", i)),
                }
            }
        })
        .collect()
}

/// Benchmark building views at page and catalog sizes.
fn bench_build(c: &mut Criterion) {
    let builder = ResultViewModelBuilder::default();
    let mut group = c.benchmark_group("build_views");

    for count in [20, 1_000, 10_000] {
        let results = make_results(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &results, |b, results| {
            b.iter(|| builder.build(black_box(results)));
        });
    }

    group.finish();
}

/// Benchmark price formatting alone.
fn bench_format_price(c: &mut Criterion) {
    let builder = ResultViewModelBuilder::default();
    c.bench_function("format_price", |b| {
        b.iter(|| builder.format_price(black_box(Some(1299.5))));
    });
}

criterion_group!(benches, bench_build, bench_format_price);
criterion_main!(benches);
