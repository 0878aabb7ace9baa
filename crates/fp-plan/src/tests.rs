//! Integration tests for fp-plan.

use std::sync::{Arc, Mutex};

use fp_assign::{Assigner, HungarianAssigner};
use fp_conflict::Conflict;
use fp_core::{
    ConflictStrategy, ConflictTest, DVec3, DetourPolicy, PlannedPath, PlannerConfig, UnitId,
};

use crate::{FormationPlan, FormationPlanner, PlanError, PlanObserver, UnitInput};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn v(x: f64, y: f64, z: f64) -> DVec3 {
    DVec3::new(x, y, z)
}

fn planner(config: PlannerConfig) -> FormationPlanner {
    FormationPlanner::new(config).unwrap()
}

fn assert_waypoints(path: &PlannedPath, expected: &[DVec3]) {
    assert_eq!(path.waypoints.len(), expected.len(), "waypoints: {:?}", path.waypoints);
    for (got, want) in path.waypoints.iter().zip(expected) {
        assert!(got.abs_diff_eq(*want, 1e-9), "got {got}, want {want}");
    }
}

/// Anchor 0 runs along the x axis; units 1 and 2 cross it at x = −10 and
/// x = +10.  Units 1 and 2 are 20 apart and never conflict with each other.
fn fan() -> (Vec<UnitInput>, impl Fn(UnitId) -> DVec3) {
    let units = vec![
        UnitInput::anchor(UnitId(0), v(-20.0, 0.0, 0.0)),
        UnitInput::new(UnitId(1), v(-10.0, -20.0, 0.0)),
        UnitInput::new(UnitId(2), v(10.0, -20.0, 0.0)),
    ];
    let targets = [v(20.0, 0.0, 0.0), v(-10.0, 20.0, 0.0), v(10.0, 20.0, 0.0)];
    (units, move |id: UnitId| targets[id.index()])
}

/// Records the source positions of every `assign` call before delegating.
#[derive(Clone, Default)]
struct RecordingAssigner {
    calls: Arc<Mutex<Vec<Vec<DVec3>>>>,
}

impl Assigner for RecordingAssigner {
    fn assign(&self, sources: &[DVec3], targets: &[DVec3]) -> Vec<usize> {
        self.calls.lock().unwrap().push(sources.to_vec());
        HungarianAssigner.assign(sources, targets)
    }
}

/// Sends every unit to slot 0, which is never a valid matching for more
/// than one unit.
struct PileUpAssigner;

impl Assigner for PileUpAssigner {
    fn assign(&self, sources: &[DVec3], _targets: &[DVec3]) -> Vec<usize> {
        vec![0; sources.len()]
    }
}

#[derive(Default)]
struct Recorder {
    assignment:  Option<(Vec<usize>, f64)>,
    conflicts:   Vec<Conflict>,
    resolved:    usize,
    plan_ends:   usize,
}

impl PlanObserver for Recorder {
    fn on_assignment(&mut self, assignment: &[usize], total_cost: f64) {
        self.assignment = Some((assignment.to_vec(), total_cost));
    }
    fn on_conflict(&mut self, conflict: &Conflict) {
        self.conflicts.push(*conflict);
    }
    fn on_path_resolved(&mut self, _path: &PlannedPath) {
        self.resolved += 1;
    }
    fn on_plan_end(&mut self, _plan: &FormationPlan) {
        self.plan_ends += 1;
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn default_config_is_accepted() {
        let p = planner(PlannerConfig::default());
        assert_eq!(p.config().collision_threshold, 5.0);
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let config = PlannerConfig { collision_threshold: -1.0, ..PlannerConfig::default() };
        let result = FormationPlanner::new(config);
        assert!(matches!(result, Err(PlanError::Config(_))));
    }

    #[test]
    fn zero_speed_is_rejected_for_custom_assigner() {
        let config = PlannerConfig { unit_speed: 0.0, ..PlannerConfig::default() };
        let result = FormationPlanner::with_assigner(config, RecordingAssigner::default());
        assert!(result.is_err());
    }
}

// ── Anchor handling and assignment ────────────────────────────────────────────

#[cfg(test)]
mod assignment {
    use super::*;

    #[test]
    fn empty_input_gives_empty_plan() {
        let mut rec = Recorder::default();
        let plan = planner(PlannerConfig::default()).plan_observed(&[], |_| DVec3::ZERO, &mut rec);
        assert!(plan.is_empty());
        assert!(plan.conflicts().is_empty());
        assert_eq!(rec.plan_ends, 1);
        assert!(rec.assignment.is_none());
    }

    #[test]
    fn parallel_lines_match_without_crossing() {
        // Slots are handed out shuffled; the optimal matching sends each unit
        // straight ahead.
        let units: Vec<UnitInput> = (0..3)
            .map(|i| UnitInput::new(UnitId(i), v(10.0 * f64::from(i), 0.0, 0.0)))
            .collect();
        let slots = [v(20.0, 100.0, 0.0), v(0.0, 100.0, 0.0), v(10.0, 100.0, 0.0)];

        let mut rec = Recorder::default();
        let plan = planner(PlannerConfig::default())
            .plan_observed(&units, |id| slots[id.index()], &mut rec);

        let (assignment, cost) = rec.assignment.unwrap();
        assert_eq!(assignment, vec![1, 2, 0]);
        assert!((cost - 300.0).abs() < 1e-9);

        for i in 0..3 {
            let p = plan.get(UnitId(i)).unwrap();
            assert!(p.end.abs_diff_eq(v(10.0 * f64::from(i), 100.0, 0.0), 1e-12));
            assert!(!p.is_detoured());
        }
        assert!(plan.conflicts().is_empty());
        assert!((plan.total_distance() - 300.0).abs() < 1e-9);
    }

    #[test]
    fn anchor_goes_to_own_slot_and_skips_assignment() {
        let assigner = RecordingAssigner::default();
        let calls = Arc::clone(&assigner.calls);
        let p = FormationPlanner::with_assigner(PlannerConfig::default(), assigner).unwrap();

        // Unit 1's slot is closer to the anchor than the anchor's own.
        let units = vec![
            UnitInput::new(UnitId(1), v(0.0, 50.0, 0.0)),
            UnitInput::anchor(UnitId(0), v(0.0, 0.0, 0.0)),
            UnitInput::new(UnitId(2), v(40.0, 50.0, 0.0)),
        ];
        let slots = [v(100.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(40.0, 60.0, 0.0)];
        let plan = p.plan(&units, |id| slots[id.index()]);

        let anchor = plan.get(UnitId(0)).unwrap();
        assert_eq!(anchor.start, v(0.0, 0.0, 0.0));
        assert_eq!(anchor.end, v(100.0, 0.0, 0.0));

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], vec![v(0.0, 50.0, 0.0), v(40.0, 50.0, 0.0)]);
        assert_eq!(plan.len(), 3);
    }

    #[test]
    fn only_first_flagged_anchor_is_the_anchor() {
        let assigner = RecordingAssigner::default();
        let calls = Arc::clone(&assigner.calls);
        let p = FormationPlanner::with_assigner(PlannerConfig::default(), assigner).unwrap();

        let units = vec![
            UnitInput::anchor(UnitId(0), v(0.0, 0.0, 0.0)),
            UnitInput::anchor(UnitId(1), v(0.0, 100.0, 0.0)),
            UnitInput::new(UnitId(2), v(0.0, 200.0, 0.0)),
        ];
        let slots = [v(0.0, 0.0, 30.0), v(0.0, 100.0, 30.0), v(0.0, 200.0, 30.0)];
        let plan = p.plan(&units, |id| slots[id.index()]);

        assert_eq!(plan.len(), 3);
        assert_eq!(calls.lock().unwrap()[0].len(), 2);
        assert!(plan.get(UnitId(1)).unwrap().end.abs_diff_eq(v(0.0, 100.0, 30.0), 1e-12));
    }

    #[test]
    fn anchor_only_skips_assignment_callback() {
        let mut rec = Recorder::default();
        let units = [UnitInput::anchor(UnitId(0), v(1.0, 2.0, 3.0))];
        let plan = planner(PlannerConfig::default())
            .plan_observed(&units, |_| v(4.0, 6.0, 3.0), &mut rec);
        assert!(rec.assignment.is_none());
        assert_eq!(plan.len(), 1);
        assert!((plan.total_distance() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn invalid_assignment_falls_back_to_input_order() {
        let p = FormationPlanner::with_assigner(PlannerConfig::default(), PileUpAssigner).unwrap();
        let units: Vec<UnitInput> = (0..3)
            .map(|i| UnitInput::new(UnitId(i), v(30.0 * f64::from(i), 0.0, 0.0)))
            .collect();
        let slots = [v(0.0, 50.0, 0.0), v(30.0, 50.0, 0.0), v(60.0, 50.0, 0.0)];

        let mut rec = Recorder::default();
        let plan = p.plan_observed(&units, |id| slots[id.index()], &mut rec);

        assert_eq!(rec.assignment.unwrap().0, vec![0, 1, 2]);
        assert_eq!(plan.len(), 3);
        for i in 0..3 {
            assert_eq!(plan.get(UnitId(i)).unwrap().end, slots[i as usize]);
        }
    }

    #[test]
    fn get_unknown_unit_is_none() {
        let units = [UnitInput::new(UnitId(7), v(0.0, 0.0, 0.0))];
        let plan = planner(PlannerConfig::default()).plan(&units, |_| v(1.0, 0.0, 0.0));
        assert_eq!(plan.get(UnitId(7)).unwrap().unit, UnitId(7));
        assert!(plan.get(UnitId(8)).is_none());
    }
}

// ── Line-to-line reform ───────────────────────────────────────────────────────

#[cfg(test)]
mod line_to_line {
    use super::*;

    const STARTS:  [f64; 4] = [-3.0, -1.0, 1.0, 3.0];
    const TARGETS: [f64; 4] = [-3.0, -1.0, 1.0, 3.0];

    fn units() -> Vec<UnitInput> {
        (0..4u32)
            .map(|i| UnitInput::new(UnitId(i), v(STARTS[i as usize], 0.0, 0.0)))
            .collect()
    }

    fn target_of(id: UnitId) -> DVec3 {
        v(0.0, 0.0, TARGETS[id.index()])
    }

    fn cost(perm: &[usize]) -> f64 {
        perm.iter()
            .enumerate()
            .map(|(i, &j)| v(STARTS[i], 0.0, 0.0).distance(target_of(UnitId(j as u32))))
            .sum()
    }

    fn all_permutations(k: usize, perm: &mut [usize], out: &mut Vec<Vec<usize>>) {
        if k == perm.len() {
            out.push(perm.to_vec());
            return;
        }
        for i in k..perm.len() {
            perm.swap(k, i);
            all_permutations(k + 1, perm, out);
            perm.swap(k, i);
        }
    }

    #[test]
    fn assignment_beats_every_other_permutation() {
        let mut rec = Recorder::default();
        planner(PlannerConfig::default()).plan_observed(&units(), target_of, &mut rec);
        let (assignment, total) = rec.assignment.unwrap();
        assert!((total - cost(&assignment)).abs() < 1e-9);

        let mut perms = Vec::new();
        all_permutations(0, &mut [0, 1, 2, 3], &mut perms);
        assert_eq!(perms.len(), 24);
        for perm in &perms {
            assert!(total <= cost(perm) + 1e-9, "{assignment:?} costs {total}, {perm:?} costs {}", cost(perm));
        }
    }

    #[test]
    fn every_path_ends_on_a_distinct_target() {
        let plan = planner(PlannerConfig::default()).plan(&units(), target_of);
        let mut ends: Vec<f64> = plan.iter().map(|p| p.end.z).collect();
        ends.sort_by(f64::total_cmp);
        assert_eq!(ends, TARGETS.to_vec());
    }

    #[test]
    fn surviving_detours_are_mirrored_about_the_conflict_point() {
        let config = PlannerConfig::default();
        let plan = planner(config.clone()).plan(&units(), target_of);
        assert!(!plan.conflicts().is_empty());

        // Last conflict touching each path; that detour is the one kept.
        let mut last = vec![None; plan.len()];
        for (k, c) in plan.conflicts().iter().enumerate() {
            last[c.a] = Some(k);
            last[c.b] = Some(k);
        }

        let paths = plan.paths();
        let mut checked = 0;
        for (k, c) in plan.conflicts().iter().enumerate() {
            assert!(c.distance <= config.collision_threshold);
            if last[c.a] != Some(k) || last[c.b] != Some(k) {
                continue;
            }
            let (a, b) = (&paths[c.a], &paths[c.b]);
            assert_eq!(a.waypoints.len(), 3);
            assert_eq!(b.waypoints.len(), 3);
            assert!(a.waypoints[1].lerp(b.waypoints[1], 0.5).abs_diff_eq(c.point, 1e-9));
            assert!((a.waypoints[1].distance(c.point) - config.detour_offset).abs() < 1e-9);
            checked += 1;
        }
        assert!(checked > 0);

        for path in paths {
            if path.is_detoured() {
                assert!(path.total_distance >= path.straight_distance());
            }
        }
    }
}

// ── Conflict resolution through the planner ───────────────────────────────────

#[cfg(test)]
mod resolution {
    use super::*;

    #[test]
    fn crossing_pair_is_detoured_symmetrically() {
        let units = [
            UnitInput::anchor(UnitId(0), v(-10.0, 0.0, 0.0)),
            UnitInput::new(UnitId(1), v(0.0, -10.0, 0.0)),
        ];
        let slots = [v(10.0, 0.0, 0.0), v(0.0, 10.0, 0.0)];
        let plan = planner(PlannerConfig::default()).plan(&units, |id| slots[id.index()]);

        assert_eq!(plan.conflicts().len(), 1);
        let c = plan.conflicts()[0];
        assert!(c.point.abs_diff_eq(DVec3::ZERO, 1e-9));
        assert!(c.distance < 1e-9);

        let a = plan.get(UnitId(0)).unwrap();
        let b = plan.get(UnitId(1)).unwrap();
        assert_waypoints(a, &[v(-10.0, 0.0, 0.0), v(0.0, 0.0, 10.0), v(10.0, 0.0, 0.0)]);
        assert_waypoints(b, &[v(0.0, -10.0, 0.0), v(0.0, 0.0, -10.0), v(0.0, 10.0, 0.0)]);

        // Detours mirror each other about the conflict point.
        assert!((a.waypoints[1] + b.waypoints[1]).abs_diff_eq(c.point * 2.0, 1e-9));

        let leg = 200.0_f64.sqrt();
        assert!((a.total_distance - 2.0 * leg).abs() < 1e-9);
        assert!((b.total_distance - 2.0 * leg).abs() < 1e-9);
        assert_eq!(plan.detoured_count(), 2);
    }

    #[test]
    fn last_conflict_wins_by_default() {
        let (units, target_of) = fan();
        let plan = planner(PlannerConfig::default()).plan(&units, target_of);

        assert_eq!(plan.conflicts().len(), 2);
        assert_waypoints(
            plan.get(UnitId(0)).unwrap(),
            &[v(-20.0, 0.0, 0.0), v(10.0, 0.0, 10.0), v(20.0, 0.0, 0.0)],
        );
        assert_waypoints(
            plan.get(UnitId(1)).unwrap(),
            &[v(-10.0, -20.0, 0.0), v(-10.0, 0.0, -10.0), v(-10.0, 20.0, 0.0)],
        );
    }

    #[test]
    fn accumulate_keeps_every_detour_in_travel_order() {
        let (units, target_of) = fan();
        let config = PlannerConfig { detour_policy: DetourPolicy::Accumulate, ..PlannerConfig::default() };
        let plan = planner(config).plan(&units, target_of);

        assert_waypoints(
            plan.get(UnitId(0)).unwrap(),
            &[v(-20.0, 0.0, 0.0), v(-10.0, 0.0, 10.0), v(10.0, 0.0, 10.0), v(20.0, 0.0, 0.0)],
        );
        assert_waypoints(
            plan.get(UnitId(2)).unwrap(),
            &[v(10.0, -20.0, 0.0), v(10.0, 0.0, -10.0), v(10.0, 20.0, 0.0)],
        );
    }

    #[test]
    fn timing_strategy_staggers_instead_of_detouring() {
        let (units, target_of) = fan();
        let config = PlannerConfig {
            strategy:               ConflictStrategy::Timing,
            unit_speed:             10.0,
            timing_separation_secs: 2.0,
            ..PlannerConfig::default()
        };
        let plan = planner(config).plan(&units, target_of);

        // Anchor reaches x = −10 after 1 s, unit 1 after 2 s: unit 1 waits 1 s.
        // Anchor reaches x = +10 after 3 s, unit 2 after 2 s: anchor waits 1 s.
        assert_eq!(plan.detoured_count(), 0);
        assert!((plan.get(UnitId(0)).unwrap().start_delay - 1.0).abs() < 1e-9);
        assert!((plan.get(UnitId(1)).unwrap().start_delay - 1.0).abs() < 1e-9);
        assert_eq!(plan.get(UnitId(2)).unwrap().start_delay, 0.0);
        assert!((plan.max_start_delay() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn crossing_2d_ignores_altitude_separation() {
        let units = [
            UnitInput::anchor(UnitId(0), v(-10.0, 0.0, 0.0)),
            UnitInput::new(UnitId(1), v(0.0, -10.0, 50.0)),
        ];
        let slots = [v(10.0, 0.0, 0.0), v(0.0, 10.0, 50.0)];

        let plan = planner(PlannerConfig::default()).plan(&units, |id| slots[id.index()]);
        assert!(plan.conflicts().is_empty());

        let config = PlannerConfig { conflict_test: ConflictTest::Crossing2d, ..PlannerConfig::default() };
        let plan = planner(config).plan(&units, |id| slots[id.index()]);
        assert_eq!(plan.conflicts().len(), 1);
        assert!(plan.conflicts()[0].point.abs_diff_eq(v(0.0, 0.0, 25.0), 1e-9));
    }

    #[test]
    fn broad_phase_route_gives_same_plan() {
        let (units, target_of) = fan();
        let exhaustive = planner(PlannerConfig::default()).plan(&units, &target_of);
        let config = PlannerConfig { broad_phase_min_units: 2, ..PlannerConfig::default() };
        let pruned = planner(config).plan(&units, &target_of);

        assert_eq!(exhaustive.conflicts(), pruned.conflicts());
        assert_eq!(exhaustive.paths(), pruned.paths());
    }

    #[test]
    fn observer_sees_every_stage() {
        let (units, target_of) = fan();
        let mut rec = Recorder::default();
        let plan = planner(PlannerConfig::default()).plan_observed(&units, target_of, &mut rec);

        assert_eq!(rec.assignment.as_ref().map(|(a, _)| a.clone()), Some(vec![0, 1]));
        assert_eq!(rec.conflicts, plan.conflicts());
        assert_eq!((rec.conflicts[0].a, rec.conflicts[0].b), (0, 1));
        assert_eq!((rec.conflicts[1].a, rec.conflicts[1].b), (0, 2));
        assert_eq!(rec.resolved, 3);
        assert_eq!(rec.plan_ends, 1);
    }
}
