// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    AlgorithmSummary, CCZ2TFactory, DEFAULT_ROUTING_OVERHEAD, Error, ParetoFrontier,
    PhysicalCost, PhysicalParameters, SimpleDataBlock, cost_model::evaluate,
    data_block::check_routing_overhead, factory::check_code_distance, validate_error_budget,
};


/// Error budget used when a search is requested without one.
pub const DEFAULT_GRID_ERROR_BUDGET: f64 = 0.1;

/// Candidate code distances for the factory levels and the data block.
///
/// The search covers the full cross product of the three lists, enumerated
/// with the level-1 distance outermost and the data distance innermost, each
/// in the order given.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridSearchSpace {
    l1_distances: Vec<u64>,
    l2_distances: Vec<u64>,
    data_distances: Vec<u64>,
    routing_overhead: f64,
}

impl Default for GridSearchSpace {
    fn default() -> Self {
        let odd = (3..=31).step_by(2).collect::<Vec<u64>>();
        Self {
            l1_distances: odd.clone(),
            l2_distances: odd.clone(),
            data_distances: odd,
            routing_overhead: DEFAULT_ROUTING_OVERHEAD,
        }
    }
}

impl GridSearchSpace {
    pub fn new(
        l1_distances: Vec<u64>,
        l2_distances: Vec<u64>,
        data_distances: Vec<u64>,
    ) -> Result<Self, Error> {
        let space = Self {
            l1_distances,
            l2_distances,
            data_distances,
            routing_overhead: DEFAULT_ROUTING_OVERHEAD,
        };
        space.validate()?;
        Ok(space)
    }

    /// Uses the same candidate distances for all three parameters.
    pub fn uniform(distances: &[u64]) -> Result<Self, Error> {
        Self::new(distances.to_vec(), distances.to_vec(), distances.to_vec())
    }

    pub fn with_routing_overhead(self, routing_overhead: f64) -> Result<Self, Error> {
        check_routing_overhead(routing_overhead)?;
        Ok(Self {
            routing_overhead,
            ..self
        })
    }

    #[must_use]
    pub fn l1_distances(&self) -> &[u64] {
        &self.l1_distances
    }

    #[must_use]
    pub fn l2_distances(&self) -> &[u64] {
        &self.l2_distances
    }

    #[must_use]
    pub fn data_distances(&self) -> &[u64] {
        &self.data_distances
    }

    #[must_use]
    pub fn routing_overhead(&self) -> f64 {
        self.routing_overhead
    }

    /// Number of layouts in the space.
    #[must_use]
    pub fn len(&self) -> usize {
        self.l1_distances.len() * self.l2_distances.len() * self.data_distances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn validate(&self) -> Result<(), Error> {
        for (name, distances) in [
            ("level-1", &self.l1_distances),
            ("level-2", &self.l2_distances),
            ("data", &self.data_distances),
        ] {
            if distances.is_empty() {
                return Err(Error::EmptyCandidateSet(name));
            }
            for &d in distances {
                check_code_distance(d)?;
            }
        }
        check_routing_overhead(self.routing_overhead)?;
        Ok(())
    }

    /// Every layout of the space in enumeration order. Fails if the space is
    /// invalid, which can happen when it was deserialized.
    pub fn layouts(&self) -> Result<Vec<(CCZ2TFactory, SimpleDataBlock)>, Error> {
        self.validate()?;
        let mut layouts = Vec::with_capacity(self.len());
        for &l1 in &self.l1_distances {
            for &l2 in &self.l2_distances {
                let factory = CCZ2TFactory::new(l1, l2)?;
                for &data_d in &self.data_distances {
                    let data_block =
                        SimpleDataBlock::with_routing_overhead(data_d, self.routing_overhead)?;
                    layouts.push((factory, data_block));
                }
            }
        }
        Ok(layouts)
    }
}

/// One evaluated layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPoint {
    pub cost: PhysicalCost,
    pub factory: CCZ2TFactory,
    pub data_block: SimpleDataBlock,
}

/// All layouts of a search, evaluated, in enumeration order.
#[derive(Clone, Debug)]
pub struct GridSearchOutcome {
    error_budget: f64,
    points: Vec<GridPoint>,
}

impl GridSearchOutcome {
    #[must_use]
    pub fn error_budget(&self) -> f64 {
        self.error_budget
    }

    #[must_use]
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    /// Layouts whose failure probability is within the budget.
    pub fn feasible(&self) -> impl Iterator<Item = &GridPoint> {
        let error_budget = self.error_budget;
        self.points
            .iter()
            .filter(move |p| p.cost.failure_prob() <= error_budget)
    }

    /// The feasible layout with the smallest footprint, then the shortest
    /// duration, then the earliest in enumeration order.
    pub fn best(&self) -> Result<GridPoint, Error> {
        let best = self.feasible().min_by(|a, b| {
            a.cost
                .footprint()
                .cmp(&b.cost.footprint())
                .then_with(|| a.cost.duration_hr().total_cmp(&b.cost.duration_hr()))
        });

        best.copied().ok_or_else(|| Error::InfeasibleErrorBudget {
            error_budget: self.error_budget,
            best_failure_prob: self
                .points
                .iter()
                .map(|p| p.cost.failure_prob())
                .min_by(f64::total_cmp)
                .unwrap_or(1.0),
        })
    }

    /// Feasible layouts not beaten in both footprint and duration by another
    /// feasible layout.
    #[must_use]
    pub fn frontier(&self) -> ParetoFrontier {
        self.feasible().copied().collect()
    }
}

/// Evaluates every layout of `space`.
///
/// Layouts are costed in parallel; results are gathered in enumeration order
/// before anything is selected, so the outcome does not depend on scheduling.
pub fn grid_search(
    algorithm: &AlgorithmSummary,
    error_budget: f64,
    params: &PhysicalParameters,
    space: &GridSearchSpace,
) -> Result<GridSearchOutcome, Error> {
    algorithm.validate()?;
    params.validate()?;
    validate_error_budget(error_budget)?;

    let layouts = space.layouts()?;
    debug!(
        "searching {} layouts for {algorithm} within error budget {error_budget}",
        layouts.len()
    );

    let points = layouts
        .par_iter()
        .map(|(factory, data_block)| -> Result<GridPoint, Error> {
            let cost = evaluate(algorithm, factory, data_block, params)?;
            trace!(
                "factory ({}, {}), data distance {}: {cost}",
                factory.distillation_l1_d(),
                factory.distillation_l2_d(),
                data_block.data_d()
            );
            Ok(GridPoint {
                cost,
                factory: *factory,
                data_block: *data_block,
            })
        })
        .collect::<Vec<_>>()
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GridSearchOutcome {
        error_budget,
        points,
    })
}

/// Cheapest layout of `space` that meets `error_budget`, with the factory
/// and data block that achieve it.
pub fn estimate_costs_from_grid_search(
    algorithm: &AlgorithmSummary,
    error_budget: f64,
    params: &PhysicalParameters,
    space: &GridSearchSpace,
) -> Result<(PhysicalCost, CCZ2TFactory, SimpleDataBlock), Error> {
    let best = grid_search(algorithm, error_budget, params, space)?.best()?;
    debug!(
        "selected factory ({}, {}), data distance {}: {}",
        best.factory.distillation_l1_d(),
        best.factory.distillation_l2_d(),
        best.data_block.data_d(),
        best.cost
    );
    Ok((best.cost, best.factory, best.data_block))
}
