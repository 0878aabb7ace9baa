//! `FormationPlan`: every unit's path plus a lookup index.

use fp_conflict::Conflict;
use fp_core::{PlannedPath, UnitId};

#[cfg(not(feature = "fx-hash"))]
type IndexMap = std::collections::HashMap<UnitId, usize>;

#[cfg(feature = "fx-hash")]
type IndexMap = rustc_hash::FxHashMap<UnitId, usize>;

/// Result of one planning call.
///
/// Holds one [`PlannedPath`] per input unit.  Path order is an
/// implementation detail (anchor first, then the rest in input order);
/// callers should key paths by [`UnitId`] through [`get`][Self::get].
#[derive(Debug, Clone, Default)]
pub struct FormationPlan {
    paths:     Vec<PlannedPath>,
    conflicts: Vec<Conflict>,
    index:     IndexMap,
}

impl FormationPlan {
    pub(crate) fn new(paths: Vec<PlannedPath>, conflicts: Vec<Conflict>) -> Self {
        let index = paths
            .iter()
            .enumerate()
            .map(|(i, p)| (p.unit, i))
            .collect();
        Self { paths, conflicts, index }
    }

    /// The plan for `unit`, if it was part of the request.
    pub fn get(&self, unit: UnitId) -> Option<&PlannedPath> {
        self.index.get(&unit).map(|&i| &self.paths[i])
    }

    #[inline]
    pub fn paths(&self) -> &[PlannedPath] {
        &self.paths
    }

    pub fn into_paths(self) -> Vec<PlannedPath> {
        self.paths
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlannedPath> {
        self.paths.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Pairs flagged during detection.  Indices refer to [`paths`][Self::paths].
    #[inline]
    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    /// Summed travel distance over every path, detours included.
    pub fn total_distance(&self) -> f64 {
        self.paths.iter().map(|p| p.total_distance).sum()
    }

    /// Number of paths carrying at least one detour waypoint.
    pub fn detoured_count(&self) -> usize {
        self.paths.iter().filter(|p| p.is_detoured()).count()
    }

    /// Largest `start_delay` in the plan; zero unless the timing strategy ran.
    pub fn max_start_delay(&self) -> f64 {
        self.paths.iter().map(|p| p.start_delay).fold(0.0, f64::max)
    }
}

impl<'a> IntoIterator for &'a FormationPlan {
    type Item     = &'a PlannedPath;
    type IntoIter = std::slice::Iter<'a, PlannedPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
