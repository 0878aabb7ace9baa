//! Assignment error type.

use thiserror::Error;

/// Conditions reported by the strict solver entry points.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AssignError {
    #[error("{sources} sources cannot be matched against {targets} targets")]
    ArgumentMismatch { sources: usize, targets: usize },

    #[error("cost at row {row}, column {col} is not finite")]
    NonFiniteCost { row: usize, col: usize },
}

pub type AssignResult<T> = Result<T, AssignError>;
