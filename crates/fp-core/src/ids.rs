//! Caller-supplied unit handle.
//!
//! `UnitId` is opaque to the planner: it is copied into the output so the
//! caller can key the returned paths, and nothing more.  Whether the unit
//! behind an ID is still alive is the caller's business; the planner never
//! looks it up.

use std::fmt;

/// Handle for a mobile unit taking part in a formation change.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(pub u32);

impl UnitId {
    /// No unit; used when a log line needs an ID that does not exist.
    pub const INVALID: UnitId = UnitId(u32::MAX);

    /// The raw value as a slot/array index on the caller side.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for UnitId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnitId({})", self.0)
    }
}

/// Fails for indices that do not fit in a `u32`.
impl TryFrom<usize> for UnitId {
    type Error = std::num::TryFromIntError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        u32::try_from(n).map(UnitId)
    }
}
