#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hobart-stats/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export sub-crates under short names
pub use hobart_data as data;
pub use hobart_estimation as estimation;
pub use hobart_math as math;
pub use hobart_output as output;
pub use hobart_solver as solver;

// Re-export the types most callers need
pub use hobart_estimation::{
    EstimationError, EstimationPipeline, PrecisionProblem, PrecisionSolver, SparseEstimate,
};
pub use hobart_solver::ProximalSolver;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
