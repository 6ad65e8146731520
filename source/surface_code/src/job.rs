// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    AlgorithmSummary, CCZ2TFactory, DEFAULT_GRID_ERROR_BUDGET, Error, FactoryStats, GridPoint,
    GridSearchSpace, PhysicalCost, PhysicalParameters, SimpleDataBlock,
    estimate_layout_from_error_budget, grid_search,
};


/// Error budget used for budget-derived layouts when none is given.
pub const DEFAULT_ERROR_BUDGET: f64 = 0.01;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EstimationMode {
    /// Default factory, data block sized to the remaining budget.
    #[default]
    ErrorBudget,
    /// Cheapest layout of a grid of code distances.
    GridSearch,
}

/// A complete estimation request, as read from a JSON job file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationJob {
    pub algorithm: AlgorithmSummary,
    #[serde(default)]
    pub physical: PhysicalParameters,
    #[serde(default)]
    pub mode: EstimationMode,
    #[serde(default)]
    pub error_budget: Option<f64>,
    #[serde(default)]
    pub search: GridSearchSpace,
    /// Also report the Pareto frontier of feasible layouts; grid search only.
    #[serde(default)]
    pub report_frontier: bool,
}

impl EstimationJob {
    #[must_use]
    pub fn new(algorithm: AlgorithmSummary, mode: EstimationMode) -> Self {
        Self {
            algorithm,
            physical: PhysicalParameters::default(),
            mode,
            error_budget: None,
            search: GridSearchSpace::default(),
            report_frontier: false,
        }
    }

    /// The requested budget, or the default for the job's mode.
    #[must_use]
    pub fn error_budget(&self) -> f64 {
        self.error_budget.unwrap_or(match self.mode {
            EstimationMode::ErrorBudget => DEFAULT_ERROR_BUDGET,
            EstimationMode::GridSearch => DEFAULT_GRID_ERROR_BUDGET,
        })
    }

    pub fn run(&self) -> Result<EstimationReport, Error> {
        let error_budget = self.error_budget();
        info!("estimating {} ({:?})", self.algorithm, self.mode);

        let (cost, factory, data_block, frontier) = match self.mode {
            EstimationMode::ErrorBudget => {
                let (cost, factory, data_block) = estimate_layout_from_error_budget(
                    &self.algorithm,
                    error_budget,
                    &self.physical,
                )?;
                (cost, factory, data_block, Vec::new())
            }
            EstimationMode::GridSearch => {
                let outcome =
                    grid_search(&self.algorithm, error_budget, &self.physical, &self.search)?;
                let best = outcome.best()?;
                let frontier = if self.report_frontier {
                    outcome.frontier().into_iter().collect()
                } else {
                    Vec::new()
                };
                (best.cost, best.factory, best.data_block, frontier)
            }
        };

        let report = EstimationReport {
            mode: self.mode,
            error_budget,
            cost,
            factory,
            factory_stats: factory.stats(&self.physical)?,
            data_block,
            frontier,
        };
        info!("{}", report.cost);
        Ok(report)
    }
}

/// Result of an [`EstimationJob`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationReport {
    pub mode: EstimationMode,
    pub error_budget: f64,
    pub cost: PhysicalCost,
    pub factory: CCZ2TFactory,
    pub factory_stats: FactoryStats,
    pub data_block: SimpleDataBlock,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frontier: Vec<GridPoint>,
}
