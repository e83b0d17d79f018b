/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use tracing::{error, info, warn};

use ossim::config::{FileConfig, Overrides, PageRunConfig, ProcessRunConfig, SimConfig};
use ossim::workload::{self, Distribution};
use ossim::{paging, record, scheduler};

// ── CLI argument definition ───────────────────────────────────────────────────

/// CPU scheduling and paging simulator.
///
/// Example:
///   ossim --sim-processes --sim-pages --seed 7 --out-dir results
#[derive(Debug, Parser)]
#[command(
    name = "ossim",
    about = "Tick-driven CPU scheduling and page replacement simulator",
    long_about = None,
)]
struct Cli {
    /// Run the CPU scheduling simulation.
    #[arg(long = "sim-processes", default_value_t = false)]
    sim_processes: bool,

    /// Run the paging simulation.
    #[arg(long = "sim-pages", default_value_t = false)]
    sim_pages: bool,

    /// Number of processes to generate [default: 128].
    #[arg(long = "num-processes")]
    num_processes: Option<u16>,

    /// Arrival times are drawn from [0, max) [default: 256].
    #[arg(long = "max-arrive-time")]
    max_arrive_time: Option<u16>,

    /// Execution times are drawn from [1, max] [default: 16].
    #[arg(long = "max-execution-time")]
    max_execution_time: Option<u16>,

    /// Number of distinct page ids in the reference pattern [default: 64].
    #[arg(long = "num-pages")]
    num_pages: Option<u16>,

    /// Length of the reference pattern [default: 512].
    #[arg(long = "total-refs")]
    total_refs: Option<u16>,

    /// Distribution of generated values: uniform | normal
    /// [default: uniform for processes, normal for pages].
    #[arg(long = "distribution")]
    distribution: Option<Distribution>,

    /// Seed for reproducible workloads.
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Root directory for the `in/` and `out/` trees [default: .].
    #[arg(long = "out-dir")]
    out_dir: Option<PathBuf>,

    /// Path to a YAML run configuration.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            sim_processes: self.sim_processes,
            sim_pages: self.sim_pages,
            num_processes: self.num_processes,
            max_arrive_time: self.max_arrive_time,
            max_execution_time: self.max_execution_time,
            num_pages: self.num_pages,
            total_refs: self.total_refs,
            distribution: self.distribution,
            seed: self.seed,
            out_dir: self.out_dir.clone(),
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialise structured logging.
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!(
        sim_processes = cli.sim_processes,
        sim_pages     = cli.sim_pages,
        seed          = ?cli.seed,
        config        = ?cli.config,
        "ossim starting up"
    );

    if let Err(e) = run(&cli) {
        error!("Simulation failed: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let file = match &cli.config {
        Some(path) => FileConfig::load_from_file(path)?,
        None => FileConfig::default(),
    };
    let config = SimConfig::resolve(file, &cli.overrides())?;

    if config.seed.is_none() {
        warn!("No seed given, workloads will not be reproducible");
    }
    let mut rng = workload::rng_from_seed(config.seed);

    if let Some(processes) = &config.processes {
        run_processes(processes, &config.out_dir, &mut rng)?;
    }
    if let Some(pages) = &config.pages {
        run_pages(pages, &config.out_dir, &mut rng)?;
    }

    info!(out_dir = %config.out_dir.display(), "=== all simulations complete ===");
    Ok(())
}

// ── Simulations ───────────────────────────────────────────────────────────────

fn run_processes(cfg: &ProcessRunConfig, base: &Path, rng: &mut StdRng) -> Result<()> {
    let input = workload::generate_processes(
        cfg.count,
        cfg.max_arrive_time,
        cfg.max_execution_time,
        cfg.distribution,
        rng,
    )
    .context("Failed to generate processes")?;
    record::save(&cfg.input_dir(base), "process", &input)?;

    let schedules =
        scheduler::simulate(&input, &cfg.algorithms).context("Scheduling simulation failed")?;

    for schedule in &schedules {
        let dir = cfg.output_dir(base, schedule.algorithm);
        record::save(&dir, "process", &schedule.processes)?;
        info!(
            "  [{alg}]  avg_wait={wait:.2}  makespan={span}  -> {dir}",
            alg = schedule.algorithm,
            wait = schedule.average_wait(),
            span = schedule.makespan(),
            dir = dir.display(),
        );
    }
    Ok(())
}

fn run_pages(cfg: &PageRunConfig, base: &Path, rng: &mut StdRng) -> Result<()> {
    let pattern =
        workload::generate_reference_pattern(cfg.num_pages, cfg.total_refs, cfg.distribution, rng)
            .context("Failed to generate reference pattern")?;
    record::save_reference_pattern(&cfg.input_dir(base), &pattern)?;

    let runs = paging::simulate(&pattern, &cfg.policies).context("Paging simulation failed")?;

    for run in &runs {
        let dir = cfg.output_dir(base, run.policy);
        record::save(&dir, "page", &run.pages)?;
        info!(
            "  [{policy}]  faults={faults}  fault_rate={rate:.3}  -> {dir}",
            policy = run.policy,
            faults = run.faults,
            rate = run.fault_rate(),
            dir = dir.display(),
        );
    }
    Ok(())
}
