use criterion::{black_box, criterion_group, criterion_main, Criterion};
use streak_core::analysis::longest_streak_distribution;
use streak_core::{OutcomeModel, StreakHistogram, StreakSimulator};

fn bench_simulation(c: &mut Criterion) {
    let sim = StreakSimulator::default();

    c.bench_function("simulate_10k_seasons", |b| {
        b.iter(|| sim.run_seeded(black_box(42)).unwrap())
    });

    c.bench_function("simulate_10k_seasons_parallel", |b| {
        b.iter(|| sim.run_parallel(black_box(42)).unwrap())
    });

    let large = StreakSimulator::new(OutcomeModel::win_only(0.5), 100_000, 14);
    let streaks = large.run_seeded(7).unwrap();
    c.bench_function("histogram_100k", |b| {
        b.iter(|| StreakHistogram::from_streaks(black_box(&streaks)))
    });
}

fn bench_exact_model(c: &mut Criterion) {
    c.bench_function("longest_streak_distribution_14", |b| {
        b.iter(|| longest_streak_distribution(black_box(0.5), black_box(14)).unwrap())
    });
}

criterion_group!(benches, bench_simulation, bench_exact_model);
criterion_main!(benches);
