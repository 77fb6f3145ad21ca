//! Error types for the estimation core.

use crate::solver::SolverStatus;
use thiserror::Error;

/// Result type for estimation operations.
pub type Result<T> = std::result::Result<T, EstimationError>;

/// Errors that can occur while building problems or running the pipeline.
#[derive(Debug, Error)]
pub enum EstimationError {
    /// Sample covariance has zero rows/columns
    #[error("Sample covariance must have dimension at least 1")]
    EmptyCovariance,

    /// Sample covariance is not square
    #[error("Sample covariance must be square, got {rows}x{cols}")]
    NonSquareCovariance {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// Sample covariance deviates from symmetry beyond tolerance
    #[error("Sample covariance must be symmetric, largest asymmetry {max_deviation:.3e}")]
    AsymmetricCovariance {
        /// Largest absolute entrywise deviation |Y_ij - Y_ji|
        max_deviation: f64,
    },

    /// Sparsity budget is not a positive finite number
    #[error("Sparsity budget must be positive and finite, got {budget}")]
    NonPositiveBudget {
        /// The offending budget value
        budget: f64,
    },

    /// Solver terminated with a non-optimal status; fatal to the whole sweep
    #[error("Solver returned status \"{status}\" for budget {budget}")]
    OptimizationFailure {
        /// Budget of the failing solve
        budget: f64,
        /// Terminal solver status
        status: SolverStatus,
    },

    /// Solver reported an optimal status without a solution matrix
    #[error("Solver reported optimal without a solution matrix for budget {budget}")]
    MissingSolution {
        /// Budget of the offending solve
        budget: f64,
    },

    /// Solver returned a matrix of the wrong shape
    #[error(
        "Solver returned a {rows}x{cols} matrix for a dimension-{expected} problem (budget {budget})"
    )]
    SolutionDimensionMismatch {
        /// Budget of the offending solve
        budget: f64,
        /// Expected square dimension
        expected: usize,
        /// Number of rows returned
        rows: usize,
        /// Number of columns returned
        cols: usize,
    },
}
