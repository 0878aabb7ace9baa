use fp_core::FpError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("planner configuration rejected: {0}")]
    Config(#[from] FpError),
}

pub type PlanResult<T> = Result<T, PlanError>;
