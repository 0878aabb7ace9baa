//! Slot layouts for the demo formations.
//!
//! All layouts face +y and sit on the plane `z = altitude`.  Slot 0 is the
//! leader's position in every shape.

use std::f64::consts::TAU;

use fp_core::DVec3;

#[derive(Copy, Clone, Debug)]
pub enum Shape {
    /// Side-by-side abreast line.
    Line,
    /// V with the leader at the apex.
    Wedge,
    /// Ring around the leader.
    Circle,
}

/// `count` slot positions for `shape`, leader at `center`.
pub fn slots(shape: Shape, count: usize, center: DVec3, spacing: f64) -> Vec<DVec3> {
    match shape {
        Shape::Line => (0..count)
            .map(|i| center + DVec3::X * (side_offset(i) * spacing))
            .collect(),
        Shape::Wedge => (0..count)
            .map(|i| {
                let rank = i.div_ceil(2) as f64;
                center + DVec3::new(side_sign(i) * rank * spacing, -rank * spacing, 0.0)
            })
            .collect(),
        Shape::Circle => {
            let mut out = Vec::with_capacity(count);
            if count == 0 {
                return out;
            }
            out.push(center);
            let ring = count - 1;
            let radius = spacing * (ring as f64 / TAU).max(1.0);
            for k in 0..ring {
                let angle = TAU * k as f64 / ring as f64;
                out.push(center + DVec3::new(radius * angle.cos(), radius * angle.sin(), 0.0));
            }
            out
        }
    }
}

/// 0, +1, −1, +2, −2, …
fn side_offset(i: usize) -> f64 {
    side_sign(i) * i.div_ceil(2) as f64
}

fn side_sign(i: usize) -> f64 {
    if i % 2 == 1 { 1.0 } else { -1.0 }
}
