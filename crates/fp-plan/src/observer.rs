//! Planning observer trait for diagnostics and instrumentation.

use fp_conflict::Conflict;
use fp_core::PlannedPath;

use crate::FormationPlan;

/// Callbacks invoked by [`FormationPlanner::plan_observed`][crate::FormationPlanner::plan_observed]
/// at key points of a planning call.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: conflict counter
///
/// ```rust,ignore
/// struct CountConflicts(usize);
///
/// impl PlanObserver for CountConflicts {
///     fn on_conflict(&mut self, _conflict: &Conflict) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait PlanObserver {
    /// Called once after the non-anchor units have been matched to slots.
    ///
    /// `assignment[i]` is the slot chosen for the i-th non-anchor unit (in
    /// input order); `total_cost` is the summed straight-line distance.
    /// Not called when there are no non-anchor units.
    fn on_assignment(&mut self, _assignment: &[usize], _total_cost: f64) {}

    /// Called for each conflicting pair, in resolution order, before it is
    /// resolved.
    fn on_conflict(&mut self, _conflict: &Conflict) {}

    /// Called for every final path, after resolution.
    fn on_path_resolved(&mut self, _path: &PlannedPath) {}

    /// Called once with the finished plan.
    fn on_plan_end(&mut self, _plan: &FormationPlan) {}
}

/// A [`PlanObserver`] that does nothing.
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}
