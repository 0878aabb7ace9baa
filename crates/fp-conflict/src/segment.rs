//! Closest approach between two finite 3D segments.
//!
//! # Formulation
//!
//! With `d1 = a1 - a0`, `d2 = b1 - b0` and `r = a0 - b0`, the squared gap
//! `|r + s·d1 - t·d2|²` is minimised over `s, t ∈ [0, 1]`.  Setting both
//! partial derivatives to zero gives the 2×2 system
//!
//! ```text
//! | a  -b | |s|   |-c|        a = d1·d1   b = d1·d2   c = d1·r
//! | b  -e | |t| = |-f|        e = d2·d2   f = d2·r
//! ```
//!
//! `s` is solved and clamped, `t` is recomputed from the clamped `s`; if `t`
//! leaves `[0, 1]` it is clamped and `s` is re-solved against it.
//!
//! When `a·e - b²` is negligible relative to `a·e` the directions are parallel
//! (or a segment is a point) and the system has no unique solution.  The
//! fallback pins `s = 0` and projects `a0` onto segment B.  For parallel
//! segments that overlap only away from `a0` this reports a valid but not
//! necessarily minimal distance.

use fp_core::{DVec3, EPSILON};

/// Result of [`closest_segment_distance`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentApproach {
    /// Minimum distance found between the two segments.
    pub distance: f64,
    /// Closest point on segment A (`a0 + s·(a1 - a0)`).
    pub point_on_a: DVec3,
    /// Closest point on segment B (`b0 + t·(b1 - b0)`).
    pub point_on_b: DVec3,
    /// Parameter along A, in `[0, 1]`.
    pub s: f64,
    /// Parameter along B, in `[0, 1]`.
    pub t: f64,
}

impl SegmentApproach {
    /// Midway between the two closest points.
    #[inline]
    pub fn midpoint(&self) -> DVec3 {
        self.point_on_a.lerp(self.point_on_b, 0.5)
    }
}

/// Minimum distance between segments `a0→a1` and `b0→b1`.
pub fn closest_segment_distance(a0: DVec3, a1: DVec3, b0: DVec3, b1: DVec3) -> SegmentApproach {
    let d1 = a1 - a0;
    let d2 = b1 - b0;
    let r  = a0 - b0;

    let a = d1.dot(d1);
    let e = d2.dot(d2);
    let b = d1.dot(d2);
    let c = d1.dot(r);
    let f = d2.dot(r);

    let det = a * e - b * b;

    // Scale-free: point segments give a·e = 0 and fall through here too.
    let (s, t) = if det <= EPSILON * a * e {
        degenerate_params(a, c, e, f)
    } else {
        let mut s = ((b * f - c * e) / det).clamp(0.0, 1.0);
        let mut t = (b * s + f) / e;
        if t < 0.0 {
            t = 0.0;
            s = (-c / a).clamp(0.0, 1.0);
        } else if t > 1.0 {
            t = 1.0;
            s = ((b - c) / a).clamp(0.0, 1.0);
        }
        (s, t)
    };

    let point_on_a = a0 + d1 * s;
    let point_on_b = b0 + d2 * t;
    SegmentApproach {
        distance: point_on_a.distance(point_on_b),
        point_on_a,
        point_on_b,
        s,
        t,
    }
}

/// Parameters for parallel or point-like segments.
fn degenerate_params(a: f64, c: f64, e: f64, f: f64) -> (f64, f64) {
    if e > EPSILON {
        log::trace!("parallel or point segment A; pinning s = 0");
        (0.0, (f / e).clamp(0.0, 1.0))
    } else if a > EPSILON {
        // B collapsed to a point: project it onto A instead.
        log::trace!("segment B is a point; pinning t = 0");
        ((-c / a).clamp(0.0, 1.0), 0.0)
    } else {
        (0.0, 0.0)
    }
}
