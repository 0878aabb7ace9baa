//! Planner configuration.
//!
//! # Defaults
//!
//! | Field                    | Default           |
//! |--------------------------|-------------------|
//! | `collision_threshold`    | 5.0               |
//! | `detour_offset`          | 10.0              |
//! | `conflict_test`          | `ClosestApproach` |
//! | `strategy`               | `Detour`          |
//! | `detour_policy`          | `LastWins`        |
//! | `unit_speed`             | 10.0              |
//! | `timing_separation_secs` | 1.0               |
//! | `broad_phase_min_units`  | 64                |
//!
//! With the `serde` feature every field is `#[serde(default)]`, so a JSON
//! config only needs the keys it overrides.

use crate::{FpError, FpResult};

// ── Strategy enums ────────────────────────────────────────────────────────────

/// How two straight paths are tested for a conflict.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ConflictTest {
    /// 3D closest-approach distance against `collision_threshold`.
    #[default]
    ClosestApproach,
    /// Exact intersection of the paths' x/y projections; ignores the
    /// threshold and altitude.
    Crossing2d,
}

/// How a detected conflict is resolved.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ConflictStrategy {
    /// Insert mirrored lateral waypoints so the paths bend apart.
    #[default]
    Detour,
    /// Keep both paths straight and stagger departure with `start_delay`.
    Timing,
}

/// What happens when one unit is involved in several conflicts.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DetourPolicy {
    /// Each conflict replaces the unit's waypoint list; the last processed
    /// conflict (in pair order) determines the final detour.
    #[default]
    LastWins,
    /// Every detour point for a unit is kept, ordered along its travel
    /// direction.
    Accumulate,
}

// ── PlannerConfig ─────────────────────────────────────────────────────────────

/// Tunables for a single planning call.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Closest-approach distance at or below which two paths conflict.
    pub collision_threshold: f64,

    /// Lateral distance of each detour point from the conflict point.
    pub detour_offset: f64,

    pub conflict_test: ConflictTest,

    pub strategy: ConflictStrategy,

    pub detour_policy: DetourPolicy,

    /// Assumed cruise speed (units/s) used by the timing strategy to estimate
    /// when a unit reaches a conflict point.
    pub unit_speed: f64,

    /// Minimum gap (seconds) the timing strategy leaves between two units
    /// passing the same conflict point.
    pub timing_separation_secs: f64,

    /// Path count at which conflict detection switches from enumerating
    /// every pair to the R-tree broad phase.
    pub broad_phase_min_units: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            collision_threshold:    5.0,
            detour_offset:          10.0,
            conflict_test:          ConflictTest::default(),
            strategy:               ConflictStrategy::default(),
            detour_policy:          DetourPolicy::default(),
            unit_speed:             10.0,
            timing_separation_secs: 1.0,
            broad_phase_min_units:  64,
        }
    }
}

impl PlannerConfig {
    /// Reject values the planner cannot work with.
    pub fn validate(&self) -> FpResult<()> {
        if !self.collision_threshold.is_finite() || self.collision_threshold < 0.0 {
            return Err(FpError::Config(format!(
                "collision_threshold must be finite and >= 0, got {}",
                self.collision_threshold
            )));
        }
        if !self.detour_offset.is_finite() || self.detour_offset < 0.0 {
            return Err(FpError::Config(format!(
                "detour_offset must be finite and >= 0, got {}",
                self.detour_offset
            )));
        }
        if !self.unit_speed.is_finite() || self.unit_speed <= 0.0 {
            return Err(FpError::Config(format!(
                "unit_speed must be finite and > 0, got {}",
                self.unit_speed
            )));
        }
        if !self.timing_separation_secs.is_finite() || self.timing_separation_secs < 0.0 {
            return Err(FpError::Config(format!(
                "timing_separation_secs must be finite and >= 0, got {}",
                self.timing_separation_secs
            )));
        }
        Ok(())
    }
}
