// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use serde::Serialize;

use crate::GridPoint;


/// Layouts not beaten in both footprint and duration by another layout.
///
/// Points are kept sorted by increasing footprint, which makes the duration
/// strictly decreasing along the frontier. A new point is therefore dominated
/// exactly when its predecessor in that order is no slower, and the points it
/// dominates form a contiguous run right after its insertion point.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct ParetoFrontier(Vec<GridPoint>);

impl ParetoFrontier {
    /// Adds `point` unless an existing point is at least as good in both
    /// footprint and duration, evicting the points it dominates. Returns
    /// whether the point was kept.
    pub fn insert(&mut self, point: GridPoint) -> bool {
        let (footprint, duration) = (point.cost.footprint(), point.cost.duration_hr());
        if duration.is_nan() {
            return false;
        }

        let pos = self.0.partition_point(|q| q.cost.footprint() < footprint);
        if pos > 0 && self.0[pos - 1].cost.duration_hr() <= duration {
            return false;
        }
        if let Some(q) = self.0.get(pos)
            && q.cost.footprint() == footprint
            && q.cost.duration_hr() <= duration
        {
            return false;
        }

        let dominated = self.0[pos..]
            .iter()
            .take_while(|q| q.cost.duration_hr() >= duration)
            .count();
        self.0.drain(pos..pos + dominated);
        self.0.insert(pos, point);
        true
    }

    #[must_use]
    pub fn as_slice(&self) -> &[GridPoint] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<GridPoint> for ParetoFrontier {
    fn from_iter<T: IntoIterator<Item = GridPoint>>(iter: T) -> Self {
        let mut frontier = Self::default();
        for point in iter {
            frontier.insert(point);
        }
        frontier
    }
}

impl IntoIterator for ParetoFrontier {
    type Item = GridPoint;
    type IntoIter = std::vec::IntoIter<GridPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
