//! The contract between the estimation pipeline and an external solver.
//!
//! A solver receives a [`PrecisionProblem`] and must return a terminal
//! status plus, when optimal, a concrete n×n value for the matrix variable.
//! Nothing else is required of it: no dual values, no warm starting, no
//! incremental interface.

use crate::problem::PrecisionProblem;
use derive_more::Display;
use ndarray::Array2;

/// Terminal status of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SolverStatus {
    /// Solved to optimality within the solver's tolerance
    #[display("optimal")]
    Optimal,

    /// The constraints admit no feasible point
    #[display("infeasible")]
    Infeasible,

    /// The objective is unbounded above on the feasible set
    #[display("unbounded")]
    Unbounded,

    /// The solver broke down numerically or gave up
    #[display("error")]
    Error,
}

/// What a solver hands back: a status and, when optimal, the matrix value.
#[derive(Debug, Clone)]
pub struct RawSolution {
    /// Terminal status of the solve.
    pub status: SolverStatus,
    /// Value of the matrix variable; present exactly when the status is
    /// [`SolverStatus::Optimal`].
    pub matrix: Option<Array2<f64>>,
}

impl RawSolution {
    /// An optimal solution carrying the solved matrix.
    pub const fn optimal(matrix: Array2<f64>) -> Self {
        Self {
            status: SolverStatus::Optimal,
            matrix: Some(matrix),
        }
    }

    /// A terminal failure with no matrix value.
    pub const fn failed(status: SolverStatus) -> Self {
        Self {
            status,
            matrix: None,
        }
    }

    /// Whether the solve reached optimality.
    pub fn is_optimal(&self) -> bool {
        self.status == SolverStatus::Optimal
    }
}

/// A convex solver capable of handling the precision-recovery program.
pub trait PrecisionSolver {
    /// Solve the program, blocking until a terminal status is reached.
    fn solve(&self, problem: &PrecisionProblem) -> RawSolution;
}

impl<S: PrecisionSolver + ?Sized> PrecisionSolver for &S {
    fn solve(&self, problem: &PrecisionProblem) -> RawSolution {
        (**self).solve(problem)
    }
}
