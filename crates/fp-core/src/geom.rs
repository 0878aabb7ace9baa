//! Geometry conventions shared by every `fp-*` crate.
//!
//! Positions and directions are [`glam::DVec3`] in the caller's formation
//! space.  The planner treats the x/y plane as horizontal and z as "up"; this
//! only matters for the detour fallback axis when two paths are parallel.

pub use glam::DVec3;

/// Tolerance for degenerate-geometry checks (zero-length directions,
/// parallel segments, vanishing cross products).
pub const EPSILON: f64 = 1e-9;
