//! Planar crossing test on the x/y projection of two segments.
//!
//! Cheaper and stricter than the closest-approach test: two paths conflict
//! only if their ground tracks actually intersect, regardless of altitude or
//! near misses.  Selected with [`ConflictTest::Crossing2d`][fp_core::ConflictTest].

use fp_core::{DVec3, EPSILON, PlannedPath};

#[inline]
fn cross2(u: DVec3, v: DVec3) -> f64 {
    u.x * v.y - u.y * v.x
}

#[inline]
fn dot2(u: DVec3, v: DVec3) -> f64 {
    u.x * v.x + u.y * v.y
}

/// Intersection parameters `(s, t)` of `a0→a1` and `b0→b1` projected onto
/// the x/y plane, or `None` if the projections do not meet.
///
/// Collinear overlapping projections report the middle of the overlap.
/// Segments whose projection is a single point never cross.
pub fn segments_intersect_2d(a0: DVec3, a1: DVec3, b0: DVec3, b1: DVec3) -> Option<(f64, f64)> {
    let r = a1 - a0;
    let q = b1 - b0;
    let rr = dot2(r, r);
    let qq = dot2(q, q);
    if rr <= EPSILON || qq <= EPSILON {
        return None;
    }

    let w = b0 - a0;
    let denom = cross2(r, q);

    if denom.abs() <= EPSILON * (rr * qq).sqrt() {
        // Parallel: only collinear tracks can touch.
        if cross2(w, r).abs() > EPSILON * rr.sqrt() * w.length().max(1.0) {
            return None;
        }
        let t0 = dot2(w, r) / rr;
        let t1 = dot2(b1 - a0, r) / rr;
        let lo = t0.min(t1).max(0.0);
        let hi = t0.max(t1).min(1.0);
        if lo > hi {
            return None;
        }
        let s = 0.5 * (lo + hi);
        let p = a0 + r * s;
        let t = (dot2(p - b0, q) / qq).clamp(0.0, 1.0);
        return Some((s, t));
    }

    let s = cross2(w, q) / denom;
    let t = cross2(w, r) / denom;
    let inside = |x: f64| (-EPSILON..=1.0 + EPSILON).contains(&x);
    if inside(s) && inside(t) {
        Some((s.clamp(0.0, 1.0), t.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Crossing point of two paths' straight ground tracks.
///
/// x/y are the shared intersection; z is the mean of both paths' altitude at
/// that point.
pub fn paths_cross(path_a: &PlannedPath, path_b: &PlannedPath) -> Option<DVec3> {
    let (s, t) = segments_intersect_2d(path_a.start, path_a.end, path_b.start, path_b.end)?;
    let on_a = path_a.start.lerp(path_a.end, s);
    let on_b = path_b.start.lerp(path_b.end, t);
    Some(on_a.lerp(on_b, 0.5))
}
