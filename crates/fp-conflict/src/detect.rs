//! Pairwise conflict detection over a set of straight paths.
//!
//! Detection always looks at each path's straight `start → end` segment,
//! never at inserted waypoints: it runs once, on the initial plans, before
//! any resolution.

use fp_core::{ConflictTest, DVec3, PlannedPath, PlannerConfig};

use crate::{broad_phase, closest_segment_distance, paths_cross};

/// A flagged pair of paths.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Conflict {
    /// Index of the first path (always `< b`).
    pub a: usize,
    /// Index of the second path.
    pub b: usize,
    /// Point both paths are routed around.
    pub point: DVec3,
    /// Closest-approach distance between the two paths.
    pub distance: f64,
}

/// Midpoint of the two paths' closest points when their straight segments
/// pass within `threshold` of each other.
pub fn conflict(path_a: &PlannedPath, path_b: &PlannedPath, threshold: f64) -> Option<DVec3> {
    let approach = closest_segment_distance(path_a.start, path_a.end, path_b.start, path_b.end);
    (approach.distance <= threshold).then(|| approach.midpoint())
}

/// Run the configured conflict test on one pair.
///
/// Returns the conflict point and the closest-approach distance.
pub fn detect_pair(
    path_a: &PlannedPath,
    path_b: &PlannedPath,
    config: &PlannerConfig,
) -> Option<(DVec3, f64)> {
    match config.conflict_test {
        ConflictTest::ClosestApproach => {
            let approach =
                closest_segment_distance(path_a.start, path_a.end, path_b.start, path_b.end);
            (approach.distance <= config.collision_threshold)
                .then(|| (approach.midpoint(), approach.distance))
        }
        ConflictTest::Crossing2d => {
            let point = paths_cross(path_a, path_b)?;
            let approach =
                closest_segment_distance(path_a.start, path_a.end, path_b.start, path_b.end);
            Some((point, approach.distance))
        }
    }
}

/// Every conflicting pair `(a, b)`, `a < b`, in lexicographic order.
///
/// Below `config.broad_phase_min_units` paths every pair is tested; at or
/// above it candidates come from [`broad_phase::candidate_pairs`].  Both
/// routes produce the same list.
pub fn find_conflicts(paths: &[PlannedPath], config: &PlannerConfig) -> Vec<Conflict> {
    let n = paths.len();
    let pairs: Vec<(usize, usize)> = if n >= config.broad_phase_min_units.max(2) {
        let planar = config.conflict_test == ConflictTest::Crossing2d;
        let margin = if planar { 0.0 } else { config.collision_threshold };
        broad_phase::candidate_pairs(paths, margin, planar)
    } else {
        all_pairs(n)
    };

    let check = |&(a, b): &(usize, usize)| {
        detect_pair(&paths[a], &paths[b], config)
            .map(|(point, distance)| Conflict { a, b, point, distance })
    };

    #[cfg(not(feature = "parallel"))]
    {
        pairs.iter().filter_map(check).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        let mut conflicts: Vec<Conflict> = pairs.par_iter().filter_map(check).collect();
        conflicts.sort_unstable_by_key(|c| (c.a, c.b));
        conflicts
    }
}

fn all_pairs(n: usize) -> Vec<(usize, usize)> {
    (0..n)
        .flat_map(|a| (a + 1..n).map(move |b| (a, b)))
        .collect()
}
