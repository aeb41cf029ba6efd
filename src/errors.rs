//! Shared error types used across submodules.

use thiserror::Error;

use crate::linalg::SolveError;
use crate::select::SelectionError;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum CircuitLabError {
    /// Wraps linear-solver failures.
    #[error(transparent)]
    Solve(#[from] SolveError),
    /// Wraps task-selection and input-validation failures.
    #[error(transparent)]
    Selection(#[from] SelectionError),
}
