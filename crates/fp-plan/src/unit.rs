//! Caller-side description of one unit.

use fp_core::{DVec3, UnitId};

/// A unit taking part in a formation change.
///
/// The caller owns the unit; the planner only sees its handle, where it is
/// now, and whether it is the anchor.  Anchor status is an explicit flag
/// rather than a slot-numbering convention.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UnitInput {
    pub id:       UnitId,
    pub position: DVec3,
    /// `true` for the unit that skips assignment and always moves to its
    /// own target.
    pub anchor:   bool,
}

impl UnitInput {
    #[inline]
    pub fn new(id: UnitId, position: DVec3) -> Self {
        Self { id, position, anchor: false }
    }

    /// Shorthand for an anchor unit.
    #[inline]
    pub fn anchor(id: UnitId, position: DVec3) -> Self {
        Self { id, position, anchor: true }
    }
}
