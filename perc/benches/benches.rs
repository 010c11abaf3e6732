use criterion::{black_box, criterion_group, criterion_main, Criterion};
use perc::{run_trial, PercolationStats};
use rand::{rngs::StdRng, SeedableRng};

fn bench_trial(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    c.bench_function("trial 200x200", |b| {
        b.iter(|| run_trial(black_box(200), &mut rng).unwrap())
    });
}

fn bench_stats(c: &mut Criterion) {
    c.bench_function("stats 50x50 x 100", |b| {
        b.iter(|| PercolationStats::run(black_box(50), 100, &mut StdRng::seed_from_u64(1)).unwrap())
    });
    c.bench_function("parallel stats 50x50 x 100", |b| {
        b.iter(|| {
            PercolationStats::run_parallel(black_box(50), 100, &mut StdRng::seed_from_u64(1))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_trial, bench_stats);
criterion_main!(benches);
