//! Ctmodels CLI - run neutral transmission simulations and report diversity.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use ctmodels::analysis::{calculate_trait_statistics, shannon_diversity, tabulate};
use ctmodels::simulation::{Simulation, SimulationConfig, TransmissionAlgorithm};
use serde::Serialize;
use std::time::Instant;

/// Ctmodels - neutral Wright-Fisher cultural transmission simulator
#[derive(Parser, Debug)]
#[command(name = "ctmodels")]
#[command(author, version, about = "Neutral cultural transmission simulator", long_about = None)]
struct Cli {
    /// Population size
    #[arg(short = 'n', long, default_value = "100")]
    popsize: usize,

    /// Number of independent traits or loci to evolve within the population
    #[arg(short = 'l', long, default_value = "4")]
    numloci: usize,

    /// Number of distinct trait ids present at generation 0
    #[arg(short = 't', long, default_value = "10")]
    inittraits: u32,

    /// Innovation rate per time step per individual (e.g., 0.1 equals 10
    /// percent chance of a mutation)
    #[arg(short = 'r', long, default_value = "0.0")]
    innovrate: f64,

    /// Length of the simulation in elemental copying steps
    #[arg(short = 's', long, default_value = "1000")]
    simlength: usize,

    /// Transmission algorithm
    #[arg(short = 'a', long, value_enum, default_value_t = Algorithm::Wfia)]
    algorithm: Algorithm,

    /// Report statistics every N generations (0 = final report only)
    #[arg(long, default_value = "100")]
    stat_interval: usize,

    /// Random seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the final report as JSON on stdout
    #[arg(long)]
    json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Algorithm {
    /// Pure Wright-Fisher drift
    Basicwf,
    /// Wright-Fisher drift with infinite-alleles innovation
    Wfia,
}

impl From<Algorithm> for TransmissionAlgorithm {
    fn from(a: Algorithm) -> Self {
        match a {
            Algorithm::Basicwf => TransmissionAlgorithm::BasicWrightFisher,
            Algorithm::Wfia => TransmissionAlgorithm::WrightFisherInfiniteAlleles,
        }
    }
}

/// Final report emitted after the run.
#[derive(Debug, Serialize)]
struct RunReport {
    config: SimulationConfig,
    generations: usize,
    elapsed_ms: f64,
    richness_by_locus: Vec<u32>,
    mean_richness: f64,
    shannon_by_locus: Vec<f64>,
    next_trait_ids: Vec<u32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = SimulationConfig::new(
        cli.popsize,
        cli.numloci,
        cli.inittraits,
        cli.innovrate,
        cli.seed,
    )
    .context("Invalid simulation configuration")?;

    let algorithm: TransmissionAlgorithm = cli.algorithm.into();
    let mut sim = Simulation::new(config.clone()).context("Failed to initialize simulation")?;

    if !cli.json {
        println!(
            "ctmodels: popsize={} numloci={} inittraits={} innovrate={} simlength={} algorithm={:?}",
            cli.popsize, cli.numloci, cli.inittraits, cli.innovrate, cli.simlength, cli.algorithm
        );
    }

    let start = Instant::now();
    let mut remaining = cli.simlength;
    while remaining > 0 {
        let chunk = if cli.stat_interval == 0 {
            remaining
        } else {
            cli.stat_interval.min(remaining)
        };
        sim.run_for(chunk, algorithm);
        remaining -= chunk;

        if !cli.json && cli.stat_interval > 0 {
            let table = tabulate(sim.population())?;
            let stats = calculate_trait_statistics(&table);
            println!(
                "gen {:>8}: mean richness {:.3}",
                sim.generation(),
                stats.mean_richness()
            );
        }
    }
    let elapsed = start.elapsed();

    let table = tabulate(sim.population())?;
    let stats = calculate_trait_statistics(&table);
    let shannon = shannon_diversity(&table);

    let report = RunReport {
        config,
        generations: sim.generation(),
        elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        richness_by_locus: stats.richness().to_vec(),
        mean_richness: stats.mean_richness(),
        shannon_by_locus: shannon,
        next_trait_ids: sim.population().next_trait_ids().to_vec(),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "done: {} generations in {:.1} ms ({:.2} steps/ms)",
            report.generations,
            report.elapsed_ms,
            report.generations as f64 / report.elapsed_ms.max(f64::MIN_POSITIVE)
        );
        for (locus, (&r, &h)) in report
            .richness_by_locus
            .iter()
            .zip(report.shannon_by_locus.iter())
            .enumerate()
        {
            println!("locus {locus}: richness {r} shannon {h:.4}");
        }
        println!("mean richness: {:.3}", report.mean_richness);
    }

    Ok(())
}
