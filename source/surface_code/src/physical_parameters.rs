// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use serde::{Deserialize, Serialize};

use crate::{Error, FOWLER_SUPERCONDUCTING, QecScheme};

#[cfg(test)]
mod tests;

/// Hardware-level inputs shared by every cost evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicalParameters {
    physical_error_rate: f64,
    cycle_time_us: f64,
    qec_scheme: QecScheme,
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        Self {
            physical_error_rate: 1e-3,
            cycle_time_us: 1.0,
            qec_scheme: FOWLER_SUPERCONDUCTING,
        }
    }
}

impl PhysicalParameters {
    pub fn new(physical_error_rate: f64, cycle_time_us: f64) -> Result<Self, Error> {
        let params = Self {
            physical_error_rate,
            cycle_time_us,
            ..Self::default()
        };
        params.validate()?;
        Ok(params)
    }

    #[must_use]
    pub fn with_qec_scheme(self, qec_scheme: QecScheme) -> Self {
        Self { qec_scheme, ..self }
    }

    /// Probability of an error per physical operation.
    #[must_use]
    pub fn physical_error_rate(&self) -> f64 {
        self.physical_error_rate
    }

    /// Duration of one surface-code cycle in microseconds.
    #[must_use]
    pub fn cycle_time_us(&self) -> f64 {
        self.cycle_time_us
    }

    #[must_use]
    pub fn qec_scheme(&self) -> &QecScheme {
        &self.qec_scheme
    }

    /// Logical error rate of one patch of distance `code_distance` under
    /// these parameters.
    pub fn logical_error_rate(&self, code_distance: u64) -> Result<f64, Error> {
        self.qec_scheme
            .logical_error_rate(code_distance, self.physical_error_rate)
    }

    pub fn validate(&self) -> Result<(), Error> {
        // exclusive bounds; NaN fails both comparisons
        if !(self.physical_error_rate > 0.0 && self.physical_error_rate < 1.0) {
            return Err(Error::InvalidPhysicalErrorRate(self.physical_error_rate));
        }
        if !(self.cycle_time_us.is_finite() && self.cycle_time_us > 0.0) {
            return Err(Error::InvalidCycleTime(self.cycle_time_us));
        }
        Ok(())
    }
}

/// Rejects error budgets that are not positive and finite. Budgets of 1 or
/// more are valid and impose no constraint.
pub fn validate_error_budget(error_budget: f64) -> Result<f64, Error> {
    if error_budget.is_finite() && error_budget > 0.0 {
        Ok(error_budget)
    } else {
        Err(Error::InvalidErrorBudget(error_budget))
    }
}
