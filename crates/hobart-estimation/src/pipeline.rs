//! The per-budget estimation loop.
//!
//! One pipeline run processes an ordered sequence of sparsity budgets
//! against a single sample covariance: for each budget it builds the
//! program, hands it to the solver, thresholds the solution, and appends
//! the result. Budgets are independent solves; the only coupling is the
//! all-or-nothing failure policy: the first non-optimal solver status
//! aborts the sweep and discards every prior result, since a failed solve
//! with unchanged deterministic inputs will not succeed on retry.

use crate::error::{EstimationError, Result};
use crate::problem::PrecisionProblem;
use crate::solver::{PrecisionSolver, SolverStatus};
use crate::threshold::{SPARSITY_TOLERANCE, sparsify};
use ndarray::Array2;

/// A thresholded precision-matrix estimate paired with its budget.
#[derive(Debug, Clone)]
pub struct SparseEstimate {
    /// The sparsity budget this estimate was produced under.
    pub budget: f64,
    /// The estimated precision matrix; entries at or below the threshold
    /// tolerance are exactly 0.0.
    pub precision: Array2<f64>,
}

impl SparseEstimate {
    /// Dimension n of the n×n estimate.
    pub fn dimension(&self) -> usize {
        self.precision.nrows()
    }

    /// Number of entries that are exactly zero.
    pub fn zero_count(&self) -> usize {
        self.precision.iter().filter(|v| **v == 0.0).count()
    }

    /// Number of entries that are not exactly zero.
    pub fn nonzero_count(&self) -> usize {
        self.precision.len() - self.zero_count()
    }

    /// Fraction of entries that are nonzero, in [0, 1].
    pub fn density(&self) -> f64 {
        self.nonzero_count() as f64 / self.precision.len() as f64
    }
}

/// Drives one estimate per requested sparsity budget.
#[derive(Debug)]
pub struct EstimationPipeline<S> {
    solver: S,
    tolerance: f64,
}

impl<S: PrecisionSolver> EstimationPipeline<S> {
    /// Pipeline with the default threshold tolerance of
    /// [`SPARSITY_TOLERANCE`].
    pub fn new(solver: S) -> Self {
        Self::with_tolerance(solver, SPARSITY_TOLERANCE)
    }

    /// Pipeline with a custom threshold tolerance.
    pub const fn with_tolerance(solver: S, tolerance: f64) -> Self {
        Self { solver, tolerance }
    }

    /// The threshold tolerance in use.
    pub const fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Produce the estimate for a single budget.
    ///
    /// # Errors
    /// Input validation errors from [`PrecisionProblem::new`], or
    /// [`EstimationError::OptimizationFailure`] if the solver does not
    /// reach optimality.
    pub fn estimate(
        &self,
        sample_covariance: &Array2<f64>,
        budget: f64,
    ) -> Result<SparseEstimate> {
        let problem = PrecisionProblem::new(sample_covariance.clone(), budget)?;
        self.solve_one(&problem)
    }

    /// Produce one estimate per budget, in input order.
    ///
    /// Every budget is validated (its problem built) before the first
    /// solver invocation, so invalid input anywhere in the sweep is
    /// rejected with no solver work performed. On the first non-optimal
    /// solver status the whole sweep fails and prior results are dropped.
    pub fn sweep(
        &self,
        sample_covariance: &Array2<f64>,
        budgets: &[f64],
    ) -> Result<Vec<SparseEstimate>> {
        let problems = budgets
            .iter()
            .map(|&budget| PrecisionProblem::new(sample_covariance.clone(), budget))
            .collect::<Result<Vec<_>>>()?;

        let mut estimates = Vec::with_capacity(problems.len());
        for problem in &problems {
            estimates.push(self.solve_one(problem)?);
        }
        Ok(estimates)
    }

    fn solve_one(&self, problem: &PrecisionProblem) -> Result<SparseEstimate> {
        let budget = problem.budget();
        let solution = self.solver.solve(problem);

        if solution.status != SolverStatus::Optimal {
            return Err(EstimationError::OptimizationFailure {
                budget,
                status: solution.status,
            });
        }
        let matrix = solution
            .matrix
            .ok_or_else(|| EstimationError::MissingSolution { budget })?;

        let expected = problem.dimension();
        let (rows, cols) = matrix.dim();
        if rows != expected || cols != expected {
            return Err(EstimationError::SolutionDimensionMismatch {
                budget,
                expected,
                rows,
                cols,
            });
        }

        Ok(SparseEstimate {
            budget,
            precision: sparsify(&matrix, self.tolerance),
        })
    }
}
