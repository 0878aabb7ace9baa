//! Assignment trait and default Hungarian implementation.
//!
//! # Pluggability
//!
//! `fp-plan` calls the solver through the [`Assigner`] trait, so callers can
//! substitute their own matching (e.g. role-aware or priority-weighted)
//! without touching the orchestrator.  [`HungarianAssigner`] is the default.

use fp_core::DVec3;

/// Pluggable unit-to-slot matching.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a single planner can be shared
/// between threads issuing independent planning calls.
pub trait Assigner: Send + Sync {
    /// Match `sources[i]` to `targets[assignment[i]]`.
    ///
    /// The returned vector must have length `sources.len()`.  For equal
    /// lengths it should be a permutation of `0..len`.
    fn assign(&self, sources: &[DVec3], targets: &[DVec3]) -> Vec<usize>;
}

/// Minimum-total-distance matching via [`crate::solve`].
#[derive(Copy, Clone, Debug, Default)]
pub struct HungarianAssigner;

impl Assigner for HungarianAssigner {
    fn assign(&self, sources: &[DVec3], targets: &[DVec3]) -> Vec<usize> {
        crate::solve(sources, targets)
    }
}
