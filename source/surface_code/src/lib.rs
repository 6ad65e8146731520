// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Physical resource estimates for fault-tolerant algorithms on a
//! surface-code architecture.
//!
//! An [`AlgorithmSummary`] (T count, Toffoli count, logical qubits) is turned
//! into a [`PhysicalCost`]: physical qubit footprint, wall-clock duration and
//! failure probability. Magic states come from a two-level CCZ-to-2T
//! distillation [factory](CCZ2TFactory); algorithm qubits live in a
//! [data block](SimpleDataBlock). Costs can be computed for a fixed layout
//! ([`estimate_costs`]), for a layout derived from an error budget
//! ([`estimate_costs_from_error_budget`]), or by searching a grid of code
//! distances ([`estimate_costs_from_grid_search`]).

use miette::Diagnostic;
use thiserror::Error;

mod algorithm_summary;
pub use algorithm_summary::AlgorithmSummary;
mod cost_model;
pub use cost_model::{
    data_block_for_budget, estimate_costs, estimate_costs_from_error_budget,
    estimate_layout_from_error_budget,
};
mod data_block;
pub use data_block::{DEFAULT_ROUTING_OVERHEAD, DataBlock, DataBlockStats, SimpleDataBlock};
mod factory;
pub use factory::{CCZ2TFactory, FactoryStats, MagicStateFactory};
mod grid_search;
pub use grid_search::{
    DEFAULT_GRID_ERROR_BUDGET, GridPoint, GridSearchOutcome, GridSearchSpace,
    estimate_costs_from_grid_search, grid_search,
};
mod job;
pub use job::{DEFAULT_ERROR_BUDGET, EstimationJob, EstimationMode, EstimationReport};
mod pareto;
pub use pareto::ParetoFrontier;
mod physical_cost;
pub use physical_cost::PhysicalCost;
mod physical_parameters;
pub use physical_parameters::{PhysicalParameters, validate_error_budget};
mod qec_scheme;
pub use qec_scheme::{FOWLER_SUPERCONDUCTING, MIN_CODE_DISTANCE, QecScheme};

#[derive(Clone, Debug, Diagnostic, Error, PartialEq)]
pub enum Error {
    #[error("physical error rate {0} must lie strictly between 0 and 1")]
    #[diagnostic(code("SurfaceCode.InvalidPhysicalErrorRate"))]
    InvalidPhysicalErrorRate(f64),

    #[error("cycle time {0} us must be positive and finite")]
    #[diagnostic(code("SurfaceCode.InvalidCycleTime"))]
    InvalidCycleTime(f64),

    #[error("error budget {0} must be positive and finite")]
    #[diagnostic(code("SurfaceCode.InvalidErrorBudget"))]
    #[diagnostic(help("budgets of 1 or more leave the layout unconstrained"))]
    InvalidErrorBudget(f64),

    #[error("routing overhead {0} must be non-negative and finite")]
    #[diagnostic(code("SurfaceCode.InvalidRoutingOverhead"))]
    InvalidRoutingOverhead(f64),

    #[error("algorithm must use at least one logical qubit")]
    #[diagnostic(code("SurfaceCode.NoAlgorithmQubits"))]
    NoAlgorithmQubits,

    #[error("algorithm consumes no magic states")]
    #[diagnostic(code("SurfaceCode.NoMagicStates"))]
    #[diagnostic(help(
        "a Clifford-only algorithm has no factory bottleneck and cannot be costed by this model"
    ))]
    NoMagicStates,

    #[error("{0} does not fit in a 64-bit unsigned integer")]
    #[diagnostic(code("SurfaceCode.CountOverflow"))]
    CountOverflow(&'static str),

    #[error("code distance {0} must be a positive odd integer")]
    #[diagnostic(code("SurfaceCode.InvalidCodeDistance"))]
    InvalidCodeDistance(u64),

    #[error("no candidate {0} distances to search")]
    #[diagnostic(code("SurfaceCode.EmptyCandidateSet"))]
    EmptyCandidateSet(&'static str),

    #[error(
        "physical error rate {physical_error_rate} is not below the threshold {threshold}"
    )]
    #[diagnostic(code("SurfaceCode.AboveThreshold"))]
    #[diagnostic(help("increasing the code distance cannot suppress logical errors"))]
    AboveThreshold {
        physical_error_rate: f64,
        threshold: f64,
    },

    #[error("{quantity} evaluated to {value}, which is not a probability")]
    #[diagnostic(code("SurfaceCode.NumericDomain"))]
    #[diagnostic(help(
        "the exponential suppression model is only valid for small logical error rates"
    ))]
    NumericDomain { quantity: &'static str, value: f64 },

    #[error(
        "distillation error {distillation_error} alone exceeds the error budget {error_budget}"
    )]
    #[diagnostic(code("SurfaceCode.ErrorBudgetExhausted"))]
    #[diagnostic(help("use a factory with larger distillation distances or relax the budget"))]
    ErrorBudgetExhausted {
        error_budget: f64,
        distillation_error: f64,
    },

    #[error(
        "no configuration meets the error budget {error_budget}; the best candidate fails with probability {best_failure_prob}"
    )]
    #[diagnostic(code("SurfaceCode.InfeasibleErrorBudget"))]
    #[diagnostic(help("widen the candidate code distances or relax the error budget"))]
    InfeasibleErrorBudget {
        error_budget: f64,
        best_failure_prob: f64,
    },
}

/// Checks that a probability computed by a model formula is finite and lies
/// in `[0, 1]`.
pub(crate) fn checked_probability(quantity: &'static str, value: f64) -> Result<f64, Error> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::NumericDomain { quantity, value })
    }
}
