//! `fp-conflict` — pairwise path conflicts and their resolution.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`segment`]     | `closest_segment_distance`, `SegmentApproach`              |
//! | [`crossing`]    | `segments_intersect_2d`, `paths_cross` (x/y projection)    |
//! | [`detect`]      | `conflict`, `detect_pair`, `find_conflicts`, `Conflict`    |
//! | [`broad_phase`] | `candidate_pairs`, R-tree pruning for large groups         |
//! | [`detour`]      | `lateral_axis`, `apply_detour`, `apply_detours`            |
//! | [`timing`]      | `estimate_crossing_time`, `resolve_by_timing`, `apply_timing` |
//!
//! Nothing is cached between calls.  Functions either return fresh values or
//! rewrite only the path slice they are handed.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Evaluates candidate pairs on Rayon's thread pool.      |

pub mod broad_phase;
pub mod crossing;
pub mod detect;
pub mod detour;
pub mod segment;
pub mod timing;


pub use broad_phase::candidate_pairs;
pub use crossing::{paths_cross, segments_intersect_2d};
pub use detect::{Conflict, conflict, detect_pair, find_conflicts};
pub use detour::{accumulate_detours, apply_detour, apply_detours, lateral_axis};
pub use segment::{SegmentApproach, closest_segment_distance};
pub use timing::{apply_timing, estimate_crossing_time, resolve_by_timing};
