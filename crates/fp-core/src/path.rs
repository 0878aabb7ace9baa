//! Per-unit movement plan.

use crate::{DVec3, UnitId};

/// The planned movement for a single unit.
///
/// A path starts out **straight** (`waypoints == [start, end]`) and may be
/// **detoured** when conflict resolution inserts intermediate points.  The
/// waypoint list always begins with `start` and ends with `end`.
///
/// The caller's animation system reads `waypoints`, `total_distance` and
/// `start_delay` to drive per-frame motion; the planner never looks at the
/// path again once it is returned.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannedPath {
    /// The unit this plan belongs to.
    pub unit: UnitId,

    /// Position the unit departs from.
    pub start: DVec3,

    /// Assigned destination slot.
    pub end: DVec3,

    /// Ordered points to visit, `start` first and `end` last (length ≥ 2).
    pub waypoints: Vec<DVec3>,

    /// Seconds to wait before departing.  Zero unless the timing strategy
    /// staggered this unit.
    pub start_delay: f64,

    /// Sum of consecutive waypoint distances.
    pub total_distance: f64,
}

impl PlannedPath {
    /// A single-segment path from `start` to `end`.
    pub fn straight(unit: UnitId, start: DVec3, end: DVec3) -> Self {
        Self {
            unit,
            start,
            end,
            waypoints:      vec![start, end],
            start_delay:    0.0,
            total_distance: start.distance(end),
        }
    }

    /// Replace the intermediate waypoints and recompute `total_distance`.
    ///
    /// `start` and `end` are re-attached automatically, so `via` holds only
    /// the points in between.
    pub fn set_waypoints(&mut self, via: &[DVec3]) {
        let mut waypoints = Vec::with_capacity(via.len() + 2);
        waypoints.push(self.start);
        waypoints.extend_from_slice(via);
        waypoints.push(self.end);
        self.waypoints = waypoints;
        self.recompute_distance();
    }

    /// Recompute `total_distance` from the current waypoint list.
    pub fn recompute_distance(&mut self) {
        self.total_distance = self.segments().map(|(a, b)| a.distance(b)).sum();
    }

    /// Consecutive `(from, to)` waypoint pairs.
    pub fn segments(&self) -> impl Iterator<Item = (DVec3, DVec3)> + '_ {
        self.waypoints.windows(2).map(|w| (w[0], w[1]))
    }

    /// Straight-line distance from `start` to `end`.
    #[inline]
    pub fn straight_distance(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Unit direction from `start` to `end`, or zero for a stationary unit.
    #[inline]
    pub fn direction(&self) -> DVec3 {
        (self.end - self.start).normalize_or_zero()
    }

    /// `true` once conflict resolution has inserted any intermediate point.
    #[inline]
    pub fn is_detoured(&self) -> bool {
        self.waypoints.len() > 2
    }
}
