//! Benchmarks for the array helpers and probe report.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use helperkit::{
    join_custom, pick_one, random_item, remove_all, remove_first, remove_where, shuffle,
    EnvSnapshot, ProbeReport, Signal,
};

fn bench_random_item(c: &mut Criterion) {
    let items: Vec<u64> = (0..1_000).collect();
    c.bench_function("random_item", |b| {
        b.iter(|| black_box(random_item(&items)))
    });
}

fn bench_pick_one(c: &mut Criterion) {
    c.bench_function("pick_one_random", |b| {
        b.iter_batched(
            || (0..1_000u64).collect::<Vec<_>>(),
            |mut items| black_box(pick_one(&mut items, None)),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_remove_where(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_where");

    for size in [10usize, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || (0..size as u64).collect::<Vec<_>>(),
                |mut items| black_box(remove_where(&mut items, |item, _| item % 3 == 0)),
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffle");

    for size in [10usize, 100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut items: Vec<u64> = (0..size as u64).collect();
            b.iter(|| {
                shuffle(&mut items);
                black_box(items.first().copied())
            })
        });
    }

    group.finish();
}

fn bench_remove_values(c: &mut Criterion) {
    let items: Vec<u64> = (0..1_000).map(|i| i % 10).collect();

    c.bench_function("remove_first", |b| {
        b.iter_batched(
            || items.clone(),
            |mut items| {
                remove_first(&mut items, &9);
                black_box(items.len())
            },
            criterion::BatchSize::SmallInput,
        )
    });

    c.bench_function("remove_all", |b| {
        b.iter(|| black_box(remove_all(&items, &9)))
    });
}

fn bench_join_custom(c: &mut Criterion) {
    let words: Vec<String> = (0..100).map(|i| format!("word-{}", i)).collect();
    c.bench_function("join_custom_100", |b| {
        b.iter(|| black_box(join_custom(&words, Some(", "), Some(" and "))))
    });
}

fn bench_probe_report(c: &mut Criterion) {
    let env = EnvSnapshot::new()
        .with_window()
        .with_navigator_user_agent("Mozilla/5.0 Chrome/124.0.0.0 Safari/537.36 Edg/124.0")
        .with_flag(Signal::Chrome)
        .with_flag(Signal::ChromeRuntime)
        .with_flag(Signal::Css);

    c.bench_function("probe_report", |b| {
        b.iter(|| black_box(ProbeReport::collect(&env)))
    });
}

criterion_group!(
    benches,
    bench_random_item,
    bench_pick_one,
    bench_remove_where,
    bench_shuffle,
    bench_remove_values,
    bench_join_custom,
    bench_probe_report,
);

criterion_main!(benches);
