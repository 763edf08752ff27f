//! Benchmarks for the transmission engine and tabulation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ctmodels::analysis::{calculate_trait_statistics, tabulate};
use ctmodels::simulation::{Simulation, SimulationConfig, TransmissionAlgorithm};

fn create_simulation(popsize: usize, numloci: usize, rate: f64) -> Simulation {
    let config = SimulationConfig::new(popsize, numloci, 10, rate, Some(42)).unwrap();
    Simulation::new(config).unwrap()
}

fn bench_basic_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_basic_wf");

    for &popsize in &[1_000usize, 10_000, 100_000] {
        let numloci = 10;
        group.throughput(Throughput::Elements((popsize * numloci) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(popsize), &popsize, |b, &n| {
            let mut sim = create_simulation(n, numloci, 0.0);
            b.iter(|| {
                sim.step_basic_wf();
                black_box(sim.generation())
            });
        });
    }

    group.finish();
}

fn bench_wfia_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_wfia");

    for &rate in &[0.0f64, 0.01, 0.1] {
        group.bench_with_input(BenchmarkId::from_parameter(rate), &rate, |b, &r| {
            let mut sim = create_simulation(10_000, 10, r);
            b.iter(|| {
                sim.step_wfia();
                black_box(sim.generation())
            });
        });
    }

    group.finish();
}

fn bench_tabulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabulate");

    for &popsize in &[1_000usize, 10_000, 100_000] {
        let numloci = 10;
        group.throughput(Throughput::Elements((popsize * numloci) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(popsize), &popsize, |b, &n| {
            let mut sim = create_simulation(n, numloci, 0.1);
            sim.run_for(10, TransmissionAlgorithm::WrightFisherInfiniteAlleles);
            b.iter(|| black_box(tabulate(sim.population()).unwrap()));
        });
    }

    group.finish();
}

fn bench_statistics(c: &mut Criterion) {
    let mut sim = create_simulation(10_000, 10, 0.1);
    sim.run_for(50, TransmissionAlgorithm::WrightFisherInfiniteAlleles);
    let table = tabulate(sim.population()).unwrap();

    c.bench_function("calculate_trait_statistics", |b| {
        b.iter(|| black_box(calculate_trait_statistics(&table)))
    });
}

criterion_group!(
    benches,
    bench_basic_step,
    bench_wfia_step,
    bench_tabulate,
    bench_statistics
);
criterion_main!(benches);
