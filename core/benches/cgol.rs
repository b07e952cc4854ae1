use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use lifecell_core::io::{integrate_pattern, load_board_from_str};
use lifecell_core::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;


use patterns::*;

criterion_group!(cgol, rules_benchmark, methuselah_benchmark, detect_benchmark);
criterion_main!(cgol);

fn rules_benchmark(c: &mut Criterion) {
    for &rule in Rule::ALL.iter() {
        bench_sim(c, rule, GLIDER, 128, 64);
    }
}

fn methuselah_benchmark(c: &mut Criterion) {
    bench_sim(c, Rule::Classic(Classic), ACORN, 200, 500);
}

fn detect_benchmark(c: &mut Criterion) {
    let pattern = load_board_from_str(PULSAR.json).expect("Failed to load pattern");
    let mut rng = StdRng::seed_from_u64(0);
    let grid = integrate_pattern(&pattern, 200, 200, Fill::Random, Placement::Center, &mut rng)
        .expect("Failed to place pattern");

    c.bench_function("detect_patterns_200x200", |b| {
        b.iter(|| detect_patterns(&grid))
    });
}

fn bench_sim(c: &mut Criterion, rule: Rule, pattern: Pattern, size: usize, gens: u64) {
    let board = load_board_from_str(pattern.json).expect("Failed to load pattern");
    let mut group = c.benchmark_group(format!("sim_{}_{}", pattern.name, rule.name()));
    group.sample_size(10);
    group.bench_function(format!("{}_gens_on_{}x{}", gens, size, size), |b| {
        b.iter_batched(
            || {
                let mut rng = StdRng::seed_from_u64(0);
                let grid = integrate_pattern(
                    &board,
                    size,
                    size,
                    Fill::Dead,
                    Placement::Center,
                    &mut rng,
                )
                .expect("Failed to place pattern");
                Simulation::new(grid, rule, rng)
            },
            |mut sim| {
                sim.step_n(gens);
                sim.population()
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}
