//! The budget-constrained solve: fast path plus penalized homotopy.

use crate::SolverError;
use crate::proximal::penalized_maximizer;
use hobart_estimation::{PrecisionProblem, PrecisionSolver, RawSolution, SolverStatus};
use hobart_math::{CholeskyFactor, entrywise_l1};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Proximal solver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProximalSolverConfig {
    /// Convergence tolerance for one penalized inner solve, relative to the
    /// iterate's Frobenius magnitude (default: 1e-8)
    pub inner_tolerance: f64,

    /// Iteration cap for one penalized inner solve (default: 20000)
    pub max_inner_iterations: usize,

    /// Relative tolerance on meeting the budget: bisection stops once the
    /// iterate's entrywise L1 norm is within this fraction below the budget
    /// (default: 1e-6)
    pub budget_tolerance: f64,

    /// Cap on bisection steps over the penalty weight (default: 200)
    pub max_bisection_iterations: usize,

    /// Largest penalty weight tried while bracketing the budget
    /// (default: 1e12)
    pub max_penalty: f64,
}

impl Default for ProximalSolverConfig {
    fn default() -> Self {
        Self {
            inner_tolerance: 1e-8,
            max_inner_iterations: 20_000,
            budget_tolerance: 1e-6,
            max_bisection_iterations: 200,
            max_penalty: 1e12,
        }
    }
}

/// First-order solver for the precision-recovery program.
///
/// With validated input the program is never infeasible (εI is feasible for
/// any positive budget) and never unbounded (the L1 ball is compact), so
/// this solver terminates with either an optimal or an error status.
#[derive(Debug, Default)]
pub struct ProximalSolver {
    config: ProximalSolverConfig,
}

impl ProximalSolver {
    /// Create a solver with the given configuration.
    pub const fn new(config: ProximalSolverConfig) -> Self {
        Self { config }
    }

    /// Solve the constrained program, returning the optimal matrix.
    ///
    /// # Errors
    /// Propagates inner-solve and penalty-search failures; see
    /// [`SolverError`].
    pub fn solve_constrained(
        &self,
        sample_covariance: &Array2<f64>,
        budget: f64,
    ) -> Result<Array2<f64>, SolverError> {
        let config = &self.config;

        // Slack constraint: the unconstrained maximizer is the inverse of Y.
        if let Ok(factor) = CholeskyFactor::decompose(sample_covariance) {
            let unconstrained = factor.inverse();
            if entrywise_l1(&unconstrained) <= budget {
                return Ok(unconstrained);
            }
        }

        // Active constraint: bracket the penalty weight from above.
        let mut lo = 0.0;
        let mut hi = 1.0;
        let mut solution = penalized_maximizer(
            sample_covariance,
            hi,
            None,
            config.inner_tolerance,
            config.max_inner_iterations,
        )?;
        while entrywise_l1(&solution) > budget {
            lo = hi;
            hi *= 2.0;
            if hi > config.max_penalty {
                return Err(SolverError::PenaltySearchFailed { penalty: hi });
            }
            solution = penalized_maximizer(
                sample_covariance,
                hi,
                Some(&solution),
                config.inner_tolerance,
                config.max_inner_iterations,
            )?;
        }

        // Bisect the penalty down toward the weight where the L1 norm meets
        // the budget, keeping the tightest feasible iterate.
        let mut best = solution;
        for _ in 0..config.max_bisection_iterations {
            if entrywise_l1(&best) >= budget * (1.0 - config.budget_tolerance) {
                break;
            }
            if (hi - lo) <= hi * 1e-12 {
                break;
            }
            let mid = 0.5 * (lo + hi);
            let candidate = penalized_maximizer(
                sample_covariance,
                mid,
                Some(&best),
                config.inner_tolerance,
                config.max_inner_iterations,
            )?;
            if entrywise_l1(&candidate) > budget {
                lo = mid;
            } else {
                hi = mid;
                best = candidate;
            }
        }

        Ok(best)
    }
}

impl PrecisionSolver for ProximalSolver {
    fn solve(&self, problem: &PrecisionProblem) -> RawSolution {
        match self.solve_constrained(problem.sample_covariance(), problem.budget()) {
            Ok(matrix) => RawSolution::optimal(matrix),
            Err(_) => RawSolution::failed(SolverStatus::Error),
        }
    }
}
