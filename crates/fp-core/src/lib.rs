//! `fp-core` — foundational types for the formation path planner.
//!
//! This crate is a dependency of every other `fp-*` crate.  It has no `fp-*`
//! dependencies; externally it uses `glam` for vectors, `thiserror`, and
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`ids`]     | `UnitId`                                                |
//! | [`geom`]    | `DVec3` (re-exported from `glam`), `EPSILON`             |
//! | [`path`]    | `PlannedPath`                                           |
//! | [`config`]  | `PlannerConfig`, `ConflictTest`, `ConflictStrategy`, `DetourPolicy` |
//! | [`error`]   | `FpError`, `FpResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geom;
pub mod ids;
pub mod path;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ConflictStrategy, ConflictTest, DetourPolicy, PlannerConfig};
pub use error::{FpError, FpResult};
pub use geom::{DVec3, EPSILON};
pub use ids::UnitId;
pub use path::PlannedPath;
