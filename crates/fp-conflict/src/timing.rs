//! Start-delay staggering as an alternative to spatial detours.
//!
//! Paths stay straight; instead, the unit that would reach a conflict point
//! second is held back until the two passages are at least
//! `separation` seconds apart.  Arrival estimates assume constant cruise
//! speed from the moment the unit departs.

use fp_core::{DVec3, EPSILON, PlannedPath};

use crate::Conflict;

/// Seconds after the plan starts at which `path` passes closest to `point`.
///
/// Includes the path's current `start_delay`.
pub fn estimate_crossing_time(path: &PlannedPath, point: DVec3, unit_speed: f64) -> f64 {
    let d = path.end - path.start;
    let len_sq = d.length_squared();
    let along = if len_sq < EPSILON {
        0.0
    } else {
        let t = ((point - path.start).dot(d) / len_sq).clamp(0.0, 1.0);
        t * len_sq.sqrt()
    };
    path.start_delay + along / unit_speed
}

/// Delay whichever path reaches `point` later (path B on a tie) so the two
/// passages are at least `separation` seconds apart.
///
/// Waypoints and distances are untouched.
pub fn resolve_by_timing(
    path_a:     &PlannedPath,
    path_b:     &PlannedPath,
    point:      DVec3,
    unit_speed: f64,
    separation: f64,
) -> (PlannedPath, PlannedPath) {
    let mut a = path_a.clone();
    let mut b = path_b.clone();

    let t_a = estimate_crossing_time(&a, point, unit_speed);
    let t_b = estimate_crossing_time(&b, point, unit_speed);
    let gap = (t_a - t_b).abs();
    if gap < separation {
        let extra = separation - gap;
        if t_a > t_b {
            a.start_delay += extra;
        } else {
            b.start_delay += extra;
        }
    }
    (a, b)
}

/// Stagger every conflict in `conflicts`, in order.  Later conflicts see the
/// delays added by earlier ones.
pub fn apply_timing(paths: &mut [PlannedPath], conflicts: &[Conflict], unit_speed: f64, separation: f64) {
    for c in conflicts {
        let (a, b) = resolve_by_timing(&paths[c.a], &paths[c.b], c.point, unit_speed, separation);
        paths[c.a] = a;
        paths[c.b] = b;
    }
}
