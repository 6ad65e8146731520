// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use log::debug;

use crate::{
    AlgorithmSummary, CCZ2TFactory, DEFAULT_ROUTING_OVERHEAD, DataBlock, Error,
    MagicStateFactory, PhysicalCost, PhysicalParameters, SimpleDataBlock,
    data_block::{check_routing_overhead, routed_logical_qubits},
    validate_error_budget,
};


const MICROSECONDS_PER_HOUR: f64 = 3_600_000_000.0;

/// Physical cost of running `algorithm` with the given factory and data
/// block.
///
/// The factory is taken to be the bottleneck: the run lasts exactly as many
/// cycles as the factory needs to distil every magic state, and the data
/// block idles for all of them. Failures are combined with the union bound
/// `distillation_error + data_error`, saturated at 1.
pub fn estimate_costs<F, D>(
    algorithm: &AlgorithmSummary,
    factory: &F,
    data_block: &D,
    params: &PhysicalParameters,
) -> Result<PhysicalCost, Error>
where
    F: MagicStateFactory + ?Sized,
    D: DataBlock + ?Sized,
{
    algorithm.validate()?;
    params.validate()?;
    evaluate(algorithm, factory, data_block, params)
}

/// [`estimate_costs`] without validating its arguments.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn evaluate<F, D>(
    algorithm: &AlgorithmSummary,
    factory: &F,
    data_block: &D,
    params: &PhysicalParameters,
) -> Result<PhysicalCost, Error>
where
    F: MagicStateFactory + ?Sized,
    D: DataBlock + ?Sized,
{
    let n_cycles = factory.n_cycles(algorithm)?;
    let distillation_error = factory.distillation_error(algorithm, params)?;
    let data_error = data_block.data_error(algorithm.n_algo_qubits(), n_cycles, params)?;

    let union_bound = distillation_error + data_error;
    if union_bound.is_nan() || union_bound < 0.0 {
        return Err(Error::NumericDomain {
            quantity: "failure probability",
            value: union_bound,
        });
    }

    let footprint =
        factory.footprint(params) + data_block.footprint(algorithm.n_algo_qubits(), params);
    let duration_hr = params.cycle_time_us() * n_cycles as f64 / MICROSECONDS_PER_HOUR;

    Ok(PhysicalCost::new(union_bound.min(1.0), footprint, duration_hr))
}

/// Data block with the smallest distance that keeps the total failure
/// probability within `error_budget` when paired with `factory`.
///
/// The factory's distillation error is charged to the budget first. What is
/// left is spread evenly over every logical patch and cycle of the run, and
/// the distance is the smallest odd one whose logical error rate fits the
/// per-patch, per-cycle share.
#[allow(clippy::cast_precision_loss)]
pub fn data_block_for_budget<F>(
    algorithm: &AlgorithmSummary,
    factory: &F,
    error_budget: f64,
    routing_overhead: f64,
    params: &PhysicalParameters,
) -> Result<SimpleDataBlock, Error>
where
    F: MagicStateFactory + ?Sized,
{
    algorithm.validate()?;
    params.validate()?;
    validate_error_budget(error_budget)?;
    check_routing_overhead(routing_overhead)?;

    let distillation_error = factory.distillation_error(algorithm, params)?;
    let remaining = error_budget - distillation_error;
    if remaining <= 0.0 {
        return Err(Error::ErrorBudgetExhausted {
            error_budget,
            distillation_error,
        });
    }

    let n_logical_qubits = routed_logical_qubits(algorithm.n_algo_qubits(), routing_overhead);
    let unit_cells = n_logical_qubits as f64 * factory.n_cycles(algorithm)? as f64;
    let data_d = params
        .qec_scheme()
        .code_distance_from_budget(params.physical_error_rate(), remaining / unit_cells)?;

    SimpleDataBlock::with_routing_overhead(data_d, routing_overhead)
}

/// Physical cost with the default [`CCZ2TFactory`] and a data block sized to
/// the remaining `error_budget`, without any search.
pub fn estimate_costs_from_error_budget(
    algorithm: &AlgorithmSummary,
    error_budget: f64,
    params: &PhysicalParameters,
) -> Result<PhysicalCost, Error> {
    estimate_layout_from_error_budget(algorithm, error_budget, params).map(|(cost, _, _)| cost)
}

/// [`estimate_costs_from_error_budget`] together with the factory and data
/// block it costs.
pub fn estimate_layout_from_error_budget(
    algorithm: &AlgorithmSummary,
    error_budget: f64,
    params: &PhysicalParameters,
) -> Result<(PhysicalCost, CCZ2TFactory, SimpleDataBlock), Error> {
    let factory = CCZ2TFactory::default();
    let data_block = data_block_for_budget(
        algorithm,
        &factory,
        error_budget,
        DEFAULT_ROUTING_OVERHEAD,
        params,
    )?;
    debug!(
        "error budget {error_budget}: factory ({}, {}), data distance {}",
        factory.distillation_l1_d(),
        factory.distillation_l2_d(),
        data_block.data_d()
    );
    let cost = evaluate(algorithm, &factory, &data_block, params)?;
    Ok((cost, factory, data_block))
}
