// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Hardware-level cost of running an algorithm on one chip layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalCost {
    failure_prob: f64,
    footprint: u64,
    duration_hr: f64,
}

impl PhysicalCost {
    #[must_use]
    pub fn new(failure_prob: f64, footprint: u64, duration_hr: f64) -> Self {
        Self {
            failure_prob,
            footprint,
            duration_hr,
        }
    }

    /// Probability that at least one logical error occurs during the run.
    #[must_use]
    pub fn failure_prob(&self) -> f64 {
        self.failure_prob
    }

    /// Physical qubits.
    #[must_use]
    pub fn footprint(&self) -> u64 {
        self.footprint
    }

    /// Wall-clock hours.
    #[must_use]
    pub fn duration_hr(&self) -> f64 {
        self.duration_hr
    }

    /// Qubit-hours.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn spacetime_volume(&self) -> f64 {
        self.footprint as f64 * self.duration_hr
    }
}

impl Display for PhysicalCost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Failure probability: {:.2e}, Footprint: {} qubits, Duration: {:.2} hours",
            self.failure_prob, self.footprint, self.duration_hr
        )
    }
}
