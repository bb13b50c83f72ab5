//! Benchmarks for namesmith-parser.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use namesmith_parser::parse;

/// Sample filenames for benchmarking
const SAMPLES: &[&str] = &[
    "hhd800.com@ZRK-002.mp4",
    "ABC-123 B.mp4",
    "abp_0123-a.mp4",
    "[HD] fc 02.wmv",
    "SSIS 00231 2.mp4",
    "ZRK-002 好きだと叫んじゃったから。 [吉高宁々].mp4",
    "vacation video.mp4",
];

fn bench_parse_single(c: &mut Criterion) {
    c.bench_function("parse_site_prefixed", |b| {
        b.iter(|| parse(black_box("hhd800.com@ZRK-002.mp4")))
    });
}

fn bench_parse_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(SAMPLES.len() as u64));
    group.bench_function("samples", |b| {
        b.iter(|| {
            for name in SAMPLES {
                black_box(parse(black_box(name)));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_parse_single, bench_parse_batch);
criterion_main!(benches);
