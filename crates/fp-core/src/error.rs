//! Planner error type.
//!
//! Planning itself never fails: degenerate geometry and malformed solver
//! input are recovered locally.  Errors only arise when a caller hands the
//! planner a configuration it cannot work with.

use thiserror::Error;

/// The base error type for `fp-core` and the crates built on it.
#[derive(Debug, Error)]
pub enum FpError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `fp-*` crates.
pub type FpResult<T> = Result<T, FpError>;
