//! `fp-plan` — formation-change orchestrator.
//!
//! # Planning pipeline
//!
//! ```text
//! plan(units, target_of):
//!   ① Anchor    — the first unit flagged `anchor` goes straight to its own
//!                 target and is excluded from assignment.
//!   ② Assign    — the remaining units are matched to the remaining slots
//!                 by the configured Assigner (Hungarian by default).
//!   ③ Detect    — every pair of straight paths is tested with the
//!                 configured ConflictTest (R-tree pruned for large groups).
//!   ④ Resolve   — Detour: mirrored lateral waypoints (LastWins/Accumulate)
//!                 Timing: later arrival gets a start_delay.
//!   ⑤ Finish    — distances recomputed, plan indexed by UnitId.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Runs the pairwise conflict scan on Rayon's thread pool.  |
//! | `fx-hash`  | Uses FxHash for the `UnitId → path` index.               |
//! | `serde`    | Serde derives on `PlannerConfig` and `PlannedPath`.      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fp_core::{DVec3, PlannerConfig, UnitId};
//! use fp_plan::{FormationPlanner, UnitInput};
//!
//! let planner = FormationPlanner::new(PlannerConfig::default())?;
//! let units = vec![
//!     UnitInput::anchor(UnitId(0), DVec3::new(0.0, 0.0, 0.0)),
//!     UnitInput::new(UnitId(1), DVec3::new(5.0, 0.0, 0.0)),
//! ];
//! let plan = planner.plan(&units, |id| slots[id.index()]);
//! ```

pub mod error;
pub mod observer;
pub mod plan;
pub mod planner;
pub mod unit;

#[cfg(test)]
mod tests;

pub use error::{PlanError, PlanResult};
pub use observer::{NoopObserver, PlanObserver};
pub use plan::FormationPlan;
pub use planner::FormationPlanner;
pub use unit::UnitInput;
