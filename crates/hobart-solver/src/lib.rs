#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hobart-stats/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod proximal;
pub mod solver;

pub use proximal::{penalized_maximizer, soft_threshold};
pub use solver::{ProximalSolver, ProximalSolverConfig};

use thiserror::Error;

/// Internal solver failures; mapped to an `error` status at the
/// [`hobart_estimation::PrecisionSolver`] boundary.
#[derive(Debug, Error)]
pub enum SolverError {
    /// A matrix kernel failed
    #[error("Math error: {0}")]
    Math(#[from] hobart_math::MathError),

    /// The proximal iteration hit its iteration cap before converging
    #[error("Proximal iteration did not converge within {max_iterations} iterations")]
    MaxIterationsExceeded {
        /// The configured cap
        max_iterations: usize,
    },

    /// The penalty could not be grown far enough to satisfy the budget
    #[error("Penalty search failed to bracket the budget (penalty reached {penalty:.3e})")]
    PenaltySearchFailed {
        /// Last penalty weight tried
        penalty: f64,
    },
}
