//! `fp-assign` — optimal assignment of units to formation slots.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`cost`]      | `CostMatrix`, a square N×N cost table                     |
//! | [`hungarian`] | `solve`, `try_solve`, `solve_matrix` (Kuhn–Munkres core)  |
//! | [`assigner`]  | `Assigner` trait, `HungarianAssigner`                     |
//! | [`error`]     | `AssignError`, `AssignResult<T>`                          |
//!
//! # Lenient vs strict
//!
//! [`solve`] never fails: mismatched input lengths or non-finite coordinates
//! are logged at `warn` and answered with the identity permutation, so a
//! malformed request still yields a usable (if unoptimised) plan.
//! [`try_solve`] reports the same conditions as [`AssignError`] instead.

pub mod assigner;
pub mod cost;
pub mod error;
pub mod hungarian;


pub use assigner::{Assigner, HungarianAssigner};
pub use cost::CostMatrix;
pub use error::{AssignError, AssignResult};
pub use hungarian::{identity, is_permutation, solve, solve_matrix, try_solve, try_solve_matrix};
