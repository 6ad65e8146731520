// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use serde::Serialize;

use crate::{AlgorithmSummary, Error, PhysicalParameters};


/// A source of magic states that the cost model can charge for space, time
/// and error.
pub trait MagicStateFactory {
    /// Physical qubits occupied by the factory.
    fn footprint(&self, params: &PhysicalParameters) -> u64;

    /// Code cycles needed to produce every magic state `algorithm` consumes.
    fn n_cycles(&self, algorithm: &AlgorithmSummary) -> Result<u64, Error>;

    /// Expected number of faulty magic states handed to `algorithm`, which
    /// upper-bounds the probability that any of them is faulty.
    fn distillation_error(
        &self,
        algorithm: &AlgorithmSummary,
        params: &PhysicalParameters,
    ) -> Result<f64, Error>;
}

/// Throughput, size and quality of a factory under fixed physical parameters.
///
/// A run that draws `n` CCZ states and performs `m` catalysations takes
/// `ceil(n / production_rate + m / catalyzation_rate)` code cycles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactoryStats {
    /// CCZ states per code cycle.
    pub production_rate: f64,
    /// CCZ-to-2T catalysations per code cycle.
    pub catalyzation_rate: f64,
    pub footprint: u64,
    /// Error probability of one output state.
    pub output_error: f64,
}

// Naive CCZ depth is 8.5 d, overlapping rounds brings it down to 5.5 d.
const CCZ_DEPTH: f64 = 5.5;

// Patches in one distillation block (4 x 8 layout).
const PATCHES_PER_BLOCK: u64 = 4 * 8;
const LEVEL1_BLOCKS: u64 = 6;

// Lattice-surgery unit cells spent in each stage.
const L0_TRANSPORT_CELLS: f64 = 100.0;
const L1_FACTORY_CELLS: f64 = 1000.0;
const L1_TRANSPORT_CELLS: f64 = 100.0;
const L2_FACTORY_CELLS: f64 = 1000.0;

// Undetected fault patterns: weight-3 for 15-to-1, weight-2 for 8-to-CCZ.
const L1_UNDETECTED_PATTERNS: f64 = 35.0;
const L2_UNDETECTED_PATTERNS: f64 = 28.0;

/// Two-level magic state factory of Gidney and Fowler, "Efficient magic state
/// factories with a catalyzed |CCZ> to 2|T> transformation" (arXiv:1812.01238).
///
/// Level 1 runs 15-to-1 T distillation at distance `distillation_l1_d`;
/// level 2 turns eight level-1 T states into one CCZ state at distance
/// `distillation_l2_d`. T gates are served by catalysing CCZ states into
/// pairs of T states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CCZ2TFactory {
    distillation_l1_d: u64,
    distillation_l2_d: u64,
}

impl Default for CCZ2TFactory {
    fn default() -> Self {
        Self {
            distillation_l1_d: 15,
            distillation_l2_d: 31,
        }
    }
}

impl CCZ2TFactory {
    pub fn new(distillation_l1_d: u64, distillation_l2_d: u64) -> Result<Self, Error> {
        for d in [distillation_l1_d, distillation_l2_d] {
            check_code_distance(d)?;
        }
        Ok(Self {
            distillation_l1_d,
            distillation_l2_d,
        })
    }

    #[must_use]
    pub fn distillation_l1_d(&self) -> u64 {
        self.distillation_l1_d
    }

    #[must_use]
    pub fn distillation_l2_d(&self) -> u64 {
        self.distillation_l2_d
    }

    /// Cycle length of one pipeline round. Level 2 cannot run faster than
    /// level 1 delivers its inputs, which takes `2 * l1_d + 1` cycles.
    #[must_use]
    pub fn distillation_d(&self) -> u64 {
        (2 * self.distillation_l1_d + 1).max(self.distillation_l2_d)
    }

    /// Code cycles spent distilling one CCZ state.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn cycles_per_ccz_state(&self) -> f64 {
        CCZ_DEPTH * self.distillation_d() as f64
    }

    /// Code cycles spent catalysing one CCZ state into two T states.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn cycles_per_catalyzation(&self) -> f64 {
        self.distillation_d() as f64
    }

    /// Error of a level-0 T state: injection plus storage at half the level-1
    /// distance.
    fn l0_error(&self, params: &PhysicalParameters) -> Result<f64, Error> {
        let storage = params.logical_error_rate(self.distillation_l1_d / 2)?;
        Ok(params.physical_error_rate() + L0_TRANSPORT_CELLS * storage)
    }

    fn l1_error(&self, params: &PhysicalParameters) -> Result<f64, Error> {
        let topological = (L1_FACTORY_CELLS + L1_TRANSPORT_CELLS)
            * params.logical_error_rate(self.distillation_l1_d)?;
        let distillation = L1_UNDETECTED_PATTERNS * self.l0_error(params)?.powi(3);
        Ok(topological + distillation)
    }

    /// Error probability of one output CCZ state, capped at 1.
    pub fn output_error(&self, params: &PhysicalParameters) -> Result<f64, Error> {
        let topological = L2_FACTORY_CELLS * params.logical_error_rate(self.distillation_l2_d)?;
        let distillation = L2_UNDETECTED_PATTERNS * self.l1_error(params)?.powi(2);
        let error = (topological + distillation).min(1.0);
        if error.is_nan() {
            return Err(Error::NumericDomain {
                quantity: "factory output error",
                value: error,
            });
        }
        Ok(error)
    }

    #[must_use]
    pub fn footprint(&self, params: &PhysicalParameters) -> u64 {
        let scheme = params.qec_scheme();
        let l1 = PATCHES_PER_BLOCK * scheme.physical_qubits(self.distillation_l1_d);
        let l2 = PATCHES_PER_BLOCK * scheme.physical_qubits(self.distillation_l2_d);
        LEVEL1_BLOCKS * l1 + l2
    }

    pub fn stats(&self, params: &PhysicalParameters) -> Result<FactoryStats, Error> {
        Ok(FactoryStats {
            production_rate: self.cycles_per_ccz_state().recip(),
            catalyzation_rate: self.cycles_per_catalyzation().recip(),
            footprint: self.footprint(params),
            output_error: self.output_error(params)?,
        })
    }
}

impl MagicStateFactory for CCZ2TFactory {
    fn footprint(&self, params: &PhysicalParameters) -> u64 {
        CCZ2TFactory::footprint(self, params)
    }

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn n_cycles(&self, algorithm: &AlgorithmSummary) -> Result<u64, Error> {
        let cycles = (algorithm.n_ccz_states()? as f64 * self.cycles_per_ccz_state()
            + algorithm.n_catalyzations() as f64 * self.cycles_per_catalyzation())
        .ceil();
        // u64::MAX rounds up to 2^64 as f64
        if cycles >= u64::MAX as f64 {
            return Err(Error::CountOverflow("code cycle count"));
        }
        Ok(cycles as u64)
    }

    #[allow(clippy::cast_precision_loss)]
    fn distillation_error(
        &self,
        algorithm: &AlgorithmSummary,
        params: &PhysicalParameters,
    ) -> Result<f64, Error> {
        Ok(self.output_error(params)? * algorithm.n_ccz_states()? as f64)
    }
}

pub(crate) fn check_code_distance(code_distance: u64) -> Result<u64, Error> {
    if code_distance % 2 == 1 {
        Ok(code_distance)
    } else {
        Err(Error::InvalidCodeDistance(code_distance))
    }
}
