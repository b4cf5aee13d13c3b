//! Enumeration benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use combinate::combination::rank;
use combinate::*;

fn benchmark_power_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("power_set");
    for n in [8usize, 12, 16] {
        let source: Vec<u32> = (0..n as u32).collect();
        group.bench_with_input(BenchmarkId::new("sum_elements", n), &source, |b, source| {
            b.iter(|| {
                let powers = power_set(source).unwrap();
                let total: u64 = powers
                    .iter()
                    .map(|view| view.iter().map(|&x| x as u64).sum::<u64>())
                    .sum();
                black_box(total)
            });
        });
    }
    group.finish();
}

fn benchmark_cursor_steps(c: &mut Criterion) {
    let source: Vec<u32> = (0..16).collect();
    c.bench_function("power_set_steps_n=16", |b| {
        let powers = power_set(&source).unwrap();
        b.iter(|| black_box(cursor::steps_forward(powers.begin())));
    });

    let source: Vec<u32> = (0..20).collect();
    c.bench_function("combination_steps_20_choose_10", |b| {
        let combos = combinations(&source, 10).unwrap();
        b.iter(|| black_box(cursor::steps_forward(combos.begin())));
    });
}

fn benchmark_combinations(c: &mut Criterion) {
    let mut group = c.benchmark_group("combinations");
    let source: Vec<u32> = (0..18).collect();
    for k in [2usize, 6, 9] {
        group.bench_with_input(BenchmarkId::new("sum_elements_n=18", k), &k, |b, &k| {
            b.iter(|| {
                let combos = combinations(&source, k).unwrap();
                let total: u64 = combos
                    .iter()
                    .map(|view| view.iter().map(|&x| x as u64).sum::<u64>())
                    .sum();
                black_box(total)
            });
        });
    }
    group.finish();
}

fn benchmark_rank(c: &mut Criterion) {
    c.bench_function("unrank_then_rank_40_choose_20", |b| {
        let len = rank::binomial(40, 20).unwrap();
        b.iter(|| {
            let indices = rank::unrank(40, 20, black_box(len / 3)).unwrap();
            black_box(rank::rank(40, &indices))
        });
    });
}

criterion_group!(
    benches,
    benchmark_power_set,
    benchmark_cursor_steps,
    benchmark_combinations,
    benchmark_rank
);
criterion_main!(benches);
