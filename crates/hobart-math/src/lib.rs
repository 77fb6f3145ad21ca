#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hobart-stats/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod factor;
pub mod symmetric;

pub use factor::{CholeskyFactor, is_positive_definite};
pub use symmetric::{entrywise_l1, frobenius_norm, is_symmetric, max_asymmetry, symmetrize};

use thiserror::Error;

/// Errors from the dense matrix kernels.
#[derive(Debug, Error)]
pub enum MathError {
    /// Matrix is not square
    #[error("Matrix must be square, got {rows}x{cols}")]
    NonSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// Matrix is not positive definite
    #[error("Matrix is not positive definite")]
    NotPositiveDefinite,
}
