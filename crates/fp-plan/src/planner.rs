//! The `FormationPlanner` orchestrator.

use fp_assign::{Assigner, CostMatrix, HungarianAssigner, identity, is_permutation};
use fp_conflict::{apply_detours, apply_timing, find_conflicts};
use fp_core::{ConflictStrategy, DVec3, PlannedPath, PlannerConfig, UnitId};

use crate::{FormationPlan, NoopObserver, PlanObserver, PlanResult, UnitInput};

/// Computes collision-aware paths for a formation change.
///
/// # Type parameter
///
/// `A` must implement [`Assigner`]; the default [`HungarianAssigner`] picks
/// the minimum-total-distance matching.
///
/// A planner holds only configuration.  Each [`plan`][Self::plan] call is
/// self-contained, so one planner can serve any number of threads.
///
/// # Example
///
/// ```rust,ignore
/// let planner = FormationPlanner::new(PlannerConfig::default())?;
/// let plan = planner.plan(&units, |id| wedge_slot(id));
/// for path in &plan {
///     animator.follow(path.unit, &path.waypoints, path.start_delay);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FormationPlanner<A: Assigner = HungarianAssigner> {
    config:   PlannerConfig,
    assigner: A,
}

impl FormationPlanner<HungarianAssigner> {
    /// Validate `config` and build a planner using the Hungarian solver.
    pub fn new(config: PlannerConfig) -> PlanResult<Self> {
        Self::with_assigner(config, HungarianAssigner)
    }
}

impl<A: Assigner> FormationPlanner<A> {
    /// Validate `config` and build a planner with a custom [`Assigner`].
    pub fn with_assigner(config: PlannerConfig, assigner: A) -> PlanResult<Self> {
        config.validate()?;
        Ok(Self { config, assigner })
    }

    #[inline]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan paths for every unit in `units`.
    ///
    /// `target_of` maps a unit to its slot in the requested formation.  The
    /// anchor (if any) always ends at its own slot; every other unit may be
    /// sent to any non-anchor slot, whichever minimises total distance.
    pub fn plan<F>(&self, units: &[UnitInput], target_of: F) -> FormationPlan
    where
        F: Fn(UnitId) -> DVec3,
    {
        self.plan_observed(units, target_of, &mut NoopObserver)
    }

    /// [`plan`][Self::plan] with progress callbacks.
    pub fn plan_observed<F, O>(&self, units: &[UnitInput], target_of: F, observer: &mut O) -> FormationPlan
    where
        F: Fn(UnitId) -> DVec3,
        O: PlanObserver,
    {
        if units.is_empty() {
            let plan = FormationPlan::default();
            observer.on_plan_end(&plan);
            return plan;
        }

        // ── ① Separate the anchor ─────────────────────────────────────────
        let (anchor, rest) = split_anchor(units);

        let mut paths = Vec::with_capacity(units.len());
        if let Some(a) = anchor {
            paths.push(PlannedPath::straight(a.id, a.position, target_of(a.id)));
        }

        // ── ② Assign the rest to their slots ──────────────────────────────
        if !rest.is_empty() {
            let sources: Vec<DVec3> = rest.iter().map(|u| u.position).collect();
            let targets: Vec<DVec3> = rest.iter().map(|u| target_of(u.id)).collect();
            let mut assignment = self.assigner.assign(&sources, &targets);
            if assignment.len() != rest.len() || !is_permutation(&assignment) {
                log::warn!(
                    "assigner returned {assignment:?} for {} units; falling back to input order",
                    rest.len()
                );
                assignment = identity(rest.len());
            }

            let cost = CostMatrix::euclidean(&sources, &targets);
            observer.on_assignment(&assignment, cost.total_cost(&assignment));

            for (unit, &slot) in rest.iter().zip(&assignment) {
                paths.push(PlannedPath::straight(unit.id, unit.position, targets[slot]));
            }
        }

        // ── ③ Detect and resolve conflicts ────────────────────────────────
        let conflicts = find_conflicts(&paths, &self.config);
        for c in &conflicts {
            observer.on_conflict(c);
        }

        match self.config.strategy {
            ConflictStrategy::Detour => apply_detours(
                &mut paths,
                &conflicts,
                self.config.detour_offset,
                self.config.detour_policy,
            ),
            ConflictStrategy::Timing => apply_timing(
                &mut paths,
                &conflicts,
                self.config.unit_speed,
                self.config.timing_separation_secs,
            ),
        }

        // ── ④ Final distances ─────────────────────────────────────────────
        for path in &mut paths {
            path.recompute_distance();
            observer.on_path_resolved(path);
        }

        let plan = FormationPlan::new(paths, conflicts);
        log::debug!(
            "planned {} units ({} anchor), {} conflicts, {} detoured, total distance {:.2}",
            plan.len(),
            usize::from(anchor.is_some()),
            plan.conflicts().len(),
            plan.detoured_count(),
            plan.total_distance(),
        );
        observer.on_plan_end(&plan);
        plan
    }
}

/// Split off the first flagged anchor; everything else keeps input order.
fn split_anchor(units: &[UnitInput]) -> (Option<&UnitInput>, Vec<&UnitInput>) {
    let mut anchor = None;
    let mut rest = Vec::with_capacity(units.len());
    for unit in units {
        if unit.anchor && anchor.is_none() {
            anchor = Some(unit);
        } else {
            if unit.anchor {
                log::warn!(
                    "{} is flagged as anchor but {} already is; planning it as a regular unit",
                    unit.id,
                    anchor.map_or(UnitId::INVALID, |a| a.id),
                );
            }
            rest.push(unit);
        }
    }
    (anchor, rest)
}
