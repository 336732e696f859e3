use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

use tallybook_series::{NumericSeries, parse_series};

fn price_series(len: usize) -> NumericSeries {
    let values = (0..len).map(|i| 100.0 + (i % 97) as f64 * 0.37).collect();
    NumericSeries::new(values).unwrap()
}

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");

    for len in [10usize, 1_000, 100_000] {
        let series = price_series(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("average", len), &series, |b, s| {
            b.iter(|| black_box(s.average()));
        });
        group.bench_with_input(BenchmarkId::new("maximum", len), &series, |b, s| {
            b.iter(|| black_box(s.maximum()));
        });
        group.bench_with_input(BenchmarkId::new("count_occurrences", len), &series, |b, s| {
            b.iter(|| black_box(s.count_occurrences(black_box(100.37))));
        });
    }

    group.finish();
}

/// Stepwise rounding goes through a decimal conversion per element.
fn bench_cumulative_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("cumulative_sum");

    for len in [10usize, 1_000, 100_000] {
        let series = price_series(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &series, |b, s| {
            b.iter(|| black_box(s.cumulative_sum()));
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let line = (0..1_000)
        .map(|i| format!("{:.2}", 100.0 + i as f64 * 0.37))
        .collect::<Vec<_>>()
        .join(", ");

    c.bench_function("parse_series_1000", |b| {
        b.iter(|| black_box(parse_series(black_box(&line)).unwrap()));
    });
}

criterion_group!(benches, bench_statistics, bench_cumulative_sum, bench_parse);
criterion_main!(benches);
