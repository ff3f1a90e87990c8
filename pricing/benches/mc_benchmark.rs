// https://bheisler.github.io/criterion.rs/book/getting_started.html

extern crate pricing;
use pricing::common::models::OptionParameters;
use pricing::simulation::monte_carlo::{MonteCarloSampler, SampleEvaluator};
use pricing::simulation::{GeometricBrownianMotion, MonteCarloEuropeanOption};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

criterion_group!(benches, criterion_terminal_price_simulation);
criterion_main!(benches);

pub fn criterion_terminal_price_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Terminal price Monte Carlo simulation");

    group.bench_function("sample terminal prices", |b| {
        b.iter(|| simulate_terminal_prices(black_box(100_000)))
    });
    group.bench_function("value a european call", |b| {
        b.iter(|| value_european_call(black_box(100_000)))
    });

    group.finish()
}

fn simulate_terminal_prices(nr_samples: usize) {
    let stock_gbm = GeometricBrownianMotion::new(300.0, 0.03, 0.15, 1.0);
    let sampler = MonteCarloSampler::new(nr_samples);

    let terminal_prices = sampler.simulate(Some(42), stock_gbm);
    let evaluator = SampleEvaluator::new(&terminal_prices);
    let avg_price = evaluator.evaluate_average(|p| p);
    assert!(avg_price.is_some());
}

fn value_european_call(nr_simulations: usize) {
    let params = OptionParameters::new(300.0, 250.0, 1.0, 0.03, 0.15).unwrap();
    let mc_option = MonteCarloEuropeanOption::new(params, nr_simulations, Some(42)).unwrap();
    assert!(mc_option.call().is_ok());
}
