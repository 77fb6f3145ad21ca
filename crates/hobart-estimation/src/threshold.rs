//! Thresholding: turning a continuous solver solution into an exactly
//! sparse matrix.
//!
//! A solver reports near-zero floating values for entries the L1 budget has
//! driven out of the model; the threshold forces every entry of magnitude at
//! or below the tolerance to exactly 0.0 so downstream consumers can read
//! the sparsity pattern off the matrix.
//!
//! Solvers are expected to return a symmetric matrix (the variable is
//! declared symmetric), but numerically perfect symmetry is not guaranteed.
//! The matrix is therefore symmetrized by averaging with its transpose
//! before the tolerance is applied. For an already-symmetric input the
//! average reproduces every entry bit-for-bit, so entries above the
//! tolerance pass through unchanged.

use hobart_math::symmetrize;
use ndarray::Array2;

/// Magnitude at or below which an entry is forced to exactly zero.
pub const SPARSITY_TOLERANCE: f64 = 1e-4;

/// Symmetrize, then zero every entry with |S_ij| <= tolerance.
///
/// Entries above the tolerance keep their floating value. Idempotent:
/// applying the threshold to its own output is a no-op.
pub fn sparsify(matrix: &Array2<f64>, tolerance: f64) -> Array2<f64> {
    symmetrize(matrix).mapv(|v| if v.abs() <= tolerance { 0.0 } else { v })
}
