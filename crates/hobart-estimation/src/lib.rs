#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hobart-stats/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod pipeline;
pub mod problem;
pub mod solver;
pub mod threshold;

pub use error::{EstimationError, Result};
pub use pipeline::{EstimationPipeline, SparseEstimate};
pub use problem::PrecisionProblem;
pub use solver::{PrecisionSolver, RawSolution, SolverStatus};
pub use threshold::{SPARSITY_TOLERANCE, sparsify};
