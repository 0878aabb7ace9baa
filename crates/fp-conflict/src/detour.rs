//! Lateral detour insertion.
//!
//! For a conflicting pair, both paths are bent away from the conflict point
//! along a shared lateral axis, in opposite directions:
//!
//! ```text
//!   detour_a = p + axis · offset
//!   detour_b = p − axis · offset
//! ```
//!
//! The axis is perpendicular to both travel directions when they are not
//! parallel.  For parallel (or anti-parallel) paths the cross product
//! vanishes, so the axis falls back to the horizontal perpendicular of path
//! A's direction.

use fp_core::{DVec3, DetourPolicy, EPSILON, PlannedPath};

use crate::Conflict;

/// Unit axis along which two paths with directions `dir_a`, `dir_b` are
/// pushed apart.
pub fn lateral_axis(dir_a: DVec3, dir_b: DVec3) -> DVec3 {
    let cross = dir_a.cross(dir_b);
    if cross.length() >= EPSILON {
        return cross.normalize_or_zero();
    }

    log::trace!("parallel paths; using horizontal perpendicular of {dir_a}");
    let horizontal = DVec3::new(-dir_a.y, dir_a.x, 0.0).normalize_or_zero();
    if horizontal == DVec3::ZERO {
        // dir_a is vertical or zero; any horizontal axis will do.
        DVec3::X
    } else {
        horizontal
    }
}

/// Detour points `(for_a, for_b)` around `point`.
fn detour_points(path_a: &PlannedPath, path_b: &PlannedPath, point: DVec3, offset: f64) -> (DVec3, DVec3) {
    let axis = lateral_axis(path_a.direction(), path_b.direction());
    (point + axis * offset, point - axis * offset)
}

/// Route both paths around `conflict_point`.
///
/// Each returned path has waypoints exactly `[start, detour, end]`; any
/// earlier detour is discarded.  `total_distance` is recomputed; all other
/// fields are copied unchanged.
pub fn apply_detour(
    path_a:         &PlannedPath,
    path_b:         &PlannedPath,
    conflict_point: DVec3,
    offset:         f64,
) -> (PlannedPath, PlannedPath) {
    let (detour_a, detour_b) = detour_points(path_a, path_b, conflict_point, offset);

    let mut a = path_a.clone();
    let mut b = path_b.clone();
    a.set_waypoints(&[detour_a]);
    b.set_waypoints(&[detour_b]);
    (a, b)
}

/// Keep every detour point a unit receives, ordered along its travel
/// direction, instead of letting the last conflict win.
///
/// Paths not named by any conflict are left untouched.
pub fn accumulate_detours(paths: &mut [PlannedPath], conflicts: &[Conflict], offset: f64) {
    let mut via: Vec<Vec<DVec3>> = vec![Vec::new(); paths.len()];
    for c in conflicts {
        let (detour_a, detour_b) = detour_points(&paths[c.a], &paths[c.b], c.point, offset);
        via[c.a].push(detour_a);
        via[c.b].push(detour_b);
    }

    for (path, mut points) in paths.iter_mut().zip(via) {
        if points.is_empty() {
            continue;
        }
        let start = path.start;
        let dir = path.direction();
        // Stable sort: equal projections keep conflict order.
        points.sort_by(|p, q| (*p - start).dot(dir).total_cmp(&(*q - start).dot(dir)));
        path.set_waypoints(&points);
    }
}

/// Resolve every conflict in `conflicts` (assumed in pair order) with the
/// given policy.
pub fn apply_detours(
    paths:     &mut [PlannedPath],
    conflicts: &[Conflict],
    offset:    f64,
    policy:    DetourPolicy,
) {
    match policy {
        DetourPolicy::LastWins => {
            for c in conflicts {
                let (a, b) = apply_detour(&paths[c.a], &paths[c.b], c.point, offset);
                paths[c.a] = a;
                paths[c.b] = b;
            }
        }
        DetourPolicy::Accumulate => accumulate_detours(paths, conflicts, offset),
    }
}
