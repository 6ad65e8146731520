// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use serde::Serialize;

use crate::{Error, PhysicalParameters, factory::check_code_distance};

#[cfg(test)]
mod tests;

/// Fraction of extra logical patches reserved for lattice-surgery routing.
pub const DEFAULT_ROUTING_OVERHEAD: f64 = 0.5;

/// Region of the chip that stores the algorithm's logical qubits while the
/// factory supplies magic states.
pub trait DataBlock {
    /// Physical qubits needed to hold `n_algo_qubits` logical qubits.
    fn footprint(&self, n_algo_qubits: u64, params: &PhysicalParameters) -> u64;

    /// Probability of a logical error anywhere in the block over `n_cycles`
    /// code cycles, accumulated additively.
    fn data_error(
        &self,
        n_algo_qubits: u64,
        n_cycles: u64,
        params: &PhysicalParameters,
    ) -> Result<f64, Error>;
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataBlockStats {
    pub footprint: u64,
    /// Probability of a logical error somewhere in the block per code cycle.
    pub per_cycle_error: f64,
}

/// Data block with uniform code distance and a fixed routing overhead.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleDataBlock {
    data_d: u64,
    routing_overhead: f64,
}

impl SimpleDataBlock {
    pub fn new(data_d: u64) -> Result<Self, Error> {
        Self::with_routing_overhead(data_d, DEFAULT_ROUTING_OVERHEAD)
    }

    pub fn with_routing_overhead(data_d: u64, routing_overhead: f64) -> Result<Self, Error> {
        check_code_distance(data_d)?;
        check_routing_overhead(routing_overhead)?;
        Ok(Self {
            data_d,
            routing_overhead,
        })
    }

    #[must_use]
    pub fn data_d(&self) -> u64 {
        self.data_d
    }

    #[must_use]
    pub fn routing_overhead(&self) -> f64 {
        self.routing_overhead
    }

    /// Logical patches including routing space.
    #[must_use]
    pub fn n_logical_qubits(&self, n_algo_qubits: u64) -> u64 {
        routed_logical_qubits(n_algo_qubits, self.routing_overhead)
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn stats(
        &self,
        n_algo_qubits: u64,
        params: &PhysicalParameters,
    ) -> Result<DataBlockStats, Error> {
        let per_patch = params.logical_error_rate(self.data_d)?;
        Ok(DataBlockStats {
            footprint: DataBlock::footprint(self, n_algo_qubits, params),
            per_cycle_error: self.n_logical_qubits(n_algo_qubits) as f64 * per_patch,
        })
    }
}

impl DataBlock for SimpleDataBlock {
    fn footprint(&self, n_algo_qubits: u64, params: &PhysicalParameters) -> u64 {
        self.n_logical_qubits(n_algo_qubits) * params.qec_scheme().physical_qubits(self.data_d)
    }

    #[allow(clippy::cast_precision_loss)]
    fn data_error(
        &self,
        n_algo_qubits: u64,
        n_cycles: u64,
        params: &PhysicalParameters,
    ) -> Result<f64, Error> {
        let unit_cells = self.n_logical_qubits(n_algo_qubits) as f64 * n_cycles as f64;
        Ok(unit_cells * params.logical_error_rate(self.data_d)?)
    }
}

pub(crate) fn check_routing_overhead(routing_overhead: f64) -> Result<f64, Error> {
    if routing_overhead.is_finite() && routing_overhead >= 0.0 {
        Ok(routing_overhead)
    } else {
        Err(Error::InvalidRoutingOverhead(routing_overhead))
    }
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub(crate) fn routed_logical_qubits(n_algo_qubits: u64, routing_overhead: f64) -> u64 {
    ((1.0 + routing_overhead) * n_algo_qubits as f64).ceil() as u64
}
