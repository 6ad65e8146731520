// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use serde::{Deserialize, Serialize};

use crate::{Error, checked_probability};


/// Error-suppression and overhead model of a surface-code family.
///
/// The logical error rate of one patch follows the usual exponential
/// suppression form `scaler * (p / threshold)^((d + 1) / 2)`, and a patch of
/// distance `d` occupies `qubits_per_distance_squared * d^2` physical qubits.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QecScheme {
    error_rate_scaler: f64,
    error_rate_threshold: f64,
    qubits_per_distance_squared: u64,
}

/// Surface code on superconducting qubits, following Fowler and Gidney.
pub const FOWLER_SUPERCONDUCTING: QecScheme = QecScheme::new(0.1, 0.01, 2);

/// Smallest distance at which a patch corrects any error.
pub const MIN_CODE_DISTANCE: u64 = 3;

impl Default for QecScheme {
    fn default() -> Self {
        FOWLER_SUPERCONDUCTING
    }
}

impl QecScheme {
    #[must_use]
    pub const fn new(
        error_rate_scaler: f64,
        error_rate_threshold: f64,
        qubits_per_distance_squared: u64,
    ) -> Self {
        Self {
            error_rate_scaler,
            error_rate_threshold,
            qubits_per_distance_squared,
        }
    }

    #[must_use]
    pub fn error_rate_scaler(&self) -> f64 {
        self.error_rate_scaler
    }

    #[must_use]
    pub fn error_rate_threshold(&self) -> f64 {
        self.error_rate_threshold
    }

    #[must_use]
    pub fn qubits_per_distance_squared(&self) -> u64 {
        self.qubits_per_distance_squared
    }

    /// Logical error rate of one patch per code cycle.
    ///
    /// The exponent is evaluated in floating point, so even distances are
    /// accepted as well; factories store level-0 states at half distance.
    #[allow(clippy::cast_precision_loss)]
    pub fn logical_error_rate(
        &self,
        code_distance: u64,
        physical_error_rate: f64,
    ) -> Result<f64, Error> {
        let exponent = (code_distance as f64 + 1.0) / 2.0;
        let rate = self.error_rate_scaler
            * (physical_error_rate / self.error_rate_threshold).powf(exponent);
        checked_probability("logical error rate", rate)
    }

    /// Physical qubits used by one logical patch.
    #[must_use]
    pub fn physical_qubits(&self, code_distance: u64) -> u64 {
        self.qubits_per_distance_squared * code_distance * code_distance
    }

    /// Smallest odd code distance, at least [`MIN_CODE_DISTANCE`], whose
    /// logical error rate does not exceed `budget`.
    ///
    /// Inverts the suppression formula in closed form, rounds up to the next
    /// odd integer and then bumps the distance while floating-point rounding
    /// still leaves the rate above the budget.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn code_distance_from_budget(
        &self,
        physical_error_rate: f64,
        budget: f64,
    ) -> Result<u64, Error> {
        if !(budget.is_finite() && budget > 0.0) {
            return Err(Error::InvalidErrorBudget(budget));
        }
        if physical_error_rate >= self.error_rate_threshold {
            return Err(Error::AboveThreshold {
                physical_error_rate,
                threshold: self.error_rate_threshold,
            });
        }

        let estimate = 2.0 * (budget / self.error_rate_scaler).ln()
            / (physical_error_rate / self.error_rate_threshold).ln()
            - 1.0;

        let mut distance = if estimate > MIN_CODE_DISTANCE as f64 {
            estimate.ceil() as u64
        } else {
            MIN_CODE_DISTANCE
        };
        if distance % 2 == 0 {
            distance += 1;
        }
        while self.logical_error_rate(distance, physical_error_rate)? > budget {
            distance += 2;
        }

        Ok(distance)
    }
}
