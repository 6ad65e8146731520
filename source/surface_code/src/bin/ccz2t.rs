// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::{fs, path::PathBuf};

use clap::Parser;
use miette::{Context, IntoDiagnostic};
use surface_code::{AlgorithmSummary, EstimationJob, EstimationMode, PhysicalParameters};

/// Physical cost of a fault-tolerant algorithm with a CCZ-to-2T factory.
///
/// Reads a JSON job when `--job` is given; any other flag overrides the
/// corresponding field of the job.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// JSON job file.
    #[arg(long)]
    job: Option<PathBuf>,

    #[arg(long)]
    t_gates: Option<u64>,

    #[arg(long)]
    toffoli_gates: Option<u64>,

    /// Logical qubits used by the algorithm.
    #[arg(long)]
    qubits: Option<u64>,

    #[arg(long)]
    physical_error_rate: Option<f64>,

    #[arg(long)]
    cycle_time_us: Option<f64>,

    #[arg(long)]
    error_budget: Option<f64>,

    /// Search a grid of code distances instead of sizing from the budget.
    #[arg(long)]
    grid_search: bool,

    /// Include the Pareto frontier of feasible layouts (grid search only).
    #[arg(long)]
    frontier: bool,
}

impl Cli {
    fn into_job(self) -> miette::Result<EstimationJob> {
        let mut job = match &self.job {
            Some(path) => {
                let contents = fs::read_to_string(path)
                    .into_diagnostic()
                    .wrap_err_with(|| format!("could not read job file {}", path.display()))?;
                serde_json::from_str(&contents)
                    .into_diagnostic()
                    .wrap_err_with(|| format!("invalid job file {}", path.display()))?
            }
            None => EstimationJob::new(AlgorithmSummary::default(), EstimationMode::ErrorBudget),
        };

        let algorithm = job.algorithm;
        job.algorithm = AlgorithmSummary::new(
            self.t_gates.unwrap_or(algorithm.t_gates()),
            self.toffoli_gates.unwrap_or(algorithm.toffoli_gates()),
            self.qubits.unwrap_or(algorithm.n_algo_qubits()),
        );

        let physical = job.physical;
        job.physical = PhysicalParameters::new(
            self.physical_error_rate
                .unwrap_or(physical.physical_error_rate()),
            self.cycle_time_us.unwrap_or(physical.cycle_time_us()),
        )?
        .with_qec_scheme(*physical.qec_scheme());

        if self.error_budget.is_some() {
            job.error_budget = self.error_budget;
        }
        if self.grid_search {
            job.mode = EstimationMode::GridSearch;
        }
        job.report_frontier |= self.frontier;

        Ok(job)
    }
}

fn main() -> miette::Result<()> {
    env_logger::init();

    let job = Cli::parse().into_job()?;
    let report = job.run()?;

    println!(
        "{}",
        serde_json::to_string_pretty(&report).into_diagnostic()?
    );
    Ok(())
}
