// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::{fmt::Display, iter::Sum};

use serde::{Deserialize, Serialize};

use crate::Error;

#[cfg(test)]
mod tests;

/// Logical resource demand of an algorithm.
///
/// Gate counts are taken as given from the circuit-construction layer; the
/// cost model never derives them itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmSummary {
    #[serde(default)]
    t_gates: u64,
    #[serde(default)]
    toffoli_gates: u64,
    #[serde(default)]
    n_algo_qubits: u64,
}

impl AlgorithmSummary {
    #[must_use]
    pub const fn new(t_gates: u64, toffoli_gates: u64, n_algo_qubits: u64) -> Self {
        Self {
            t_gates,
            toffoli_gates,
            n_algo_qubits,
        }
    }

    #[must_use]
    pub fn t_gates(&self) -> u64 {
        self.t_gates
    }

    #[must_use]
    pub fn toffoli_gates(&self) -> u64 {
        self.toffoli_gates
    }

    #[must_use]
    pub fn n_algo_qubits(&self) -> u64 {
        self.n_algo_qubits
    }

    /// T-equivalent magic states, counting each Toffoli as four T gates.
    pub fn total_t_count(&self) -> Result<u64, Error> {
        self.toffoli_gates
            .checked_mul(4)
            .and_then(|t| t.checked_add(self.t_gates))
            .ok_or(Error::CountOverflow("T-equivalent gate count"))
    }

    /// CCZ states drawn from a CCZ factory. Each Toffoli consumes one, and a
    /// single CCZ state is catalysed into two T states.
    pub fn n_ccz_states(&self) -> Result<u64, Error> {
        self.toffoli_gates
            .checked_add(self.n_catalyzations())
            .ok_or(Error::CountOverflow("CCZ state count"))
    }

    /// Catalysed CCZ-to-2T conversions needed to supply the T gates.
    #[must_use]
    pub fn n_catalyzations(&self) -> u64 {
        self.t_gates.div_ceil(2)
    }

    /// Gate counts of this summary run `repetitions` times in sequence. The
    /// qubit count is unchanged since the register is reused.
    pub fn repeated(&self, repetitions: u64) -> Result<Self, Error> {
        let overflow = || Error::CountOverflow("repeated gate count");
        Ok(Self {
            t_gates: self.t_gates.checked_mul(repetitions).ok_or_else(overflow)?,
            toffoli_gates: self
                .toffoli_gates
                .checked_mul(repetitions)
                .ok_or_else(overflow)?,
            n_algo_qubits: self.n_algo_qubits,
        })
    }

    /// Sequential composition: gate counts add up while the wider register
    /// determines the qubit count.
    pub fn checked_add(&self, other: &AlgorithmSummary) -> Result<Self, Error> {
        let overflow = || Error::CountOverflow("combined gate count");
        Ok(Self {
            t_gates: self.t_gates.checked_add(other.t_gates).ok_or_else(overflow)?,
            toffoli_gates: self
                .toffoli_gates
                .checked_add(other.toffoli_gates)
                .ok_or_else(overflow)?,
            n_algo_qubits: self.n_algo_qubits.max(other.n_algo_qubits),
        })
    }

    /// Checks that the summary can be costed. Every count derived from it
    /// must fit in 64 bits.
    pub fn validate(&self) -> Result<(), Error> {
        if self.n_algo_qubits == 0 {
            return Err(Error::NoAlgorithmQubits);
        }
        if self.total_t_count()? == 0 {
            return Err(Error::NoMagicStates);
        }
        self.n_ccz_states()?;
        Ok(())
    }
}

/// Sequential composition of many blocks, failing on the first overflow.
impl Sum<AlgorithmSummary> for Result<AlgorithmSummary, Error> {
    fn sum<I: Iterator<Item = AlgorithmSummary>>(mut iter: I) -> Self {
        iter.try_fold(AlgorithmSummary::default(), |total, block| {
            total.checked_add(&block)
        })
    }
}

impl Display for AlgorithmSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "T gates: {}, Toffoli gates: {}, Algorithm qubits: {}",
            self.t_gates, self.toffoli_gates, self.n_algo_qubits
        )
    }
}
