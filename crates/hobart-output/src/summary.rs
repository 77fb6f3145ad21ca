//! Sparsity summaries for estimated precision matrices.

use hobart_estimation::SparseEstimate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantitative sparsity profile of one estimate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SparsitySummary {
    /// The sparsity budget the estimate was produced under.
    pub budget: f64,

    /// Dimension n of the n×n estimate.
    pub dimension: usize,

    /// Number of entries that are exactly zero.
    pub zero_count: usize,

    /// Number of nonzero entries.
    pub nonzero_count: usize,

    /// Fraction of entries that are nonzero, in [0, 1].
    pub density: f64,

    /// Sum of absolute values of all entries.
    pub entrywise_l1: f64,
}

impl SparsitySummary {
    /// Summarize one estimate.
    pub fn from_estimate(estimate: &SparseEstimate) -> Self {
        Self {
            budget: estimate.budget,
            dimension: estimate.dimension(),
            zero_count: estimate.zero_count(),
            nonzero_count: estimate.nonzero_count(),
            density: estimate.density(),
            entrywise_l1: estimate.precision.iter().map(|v| v.abs()).sum(),
        }
    }
}

impl fmt::Display for SparsitySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "budget {}: {}x{}, {}/{} zero entries (density {:.1}%), entrywise L1 {:.4}",
            self.budget,
            self.dimension,
            self.dimension,
            self.zero_count,
            self.zero_count + self.nonzero_count,
            self.density * 100.0,
            self.entrywise_l1
        )
    }
}

/// Summarize a sweep, preserving budget order.
pub fn summarize_sweep(estimates: &[SparseEstimate]) -> Vec<SparsitySummary> {
    estimates.iter().map(SparsitySummary::from_estimate).collect()
}
