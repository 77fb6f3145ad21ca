//! Cholesky factorization for symmetric positive definite matrices.
//!
//! The factorization A = L L^T is computed by the standard inner-product
//! algorithm. It doubles as the positive-definiteness test: a pivot that is
//! not strictly positive means the input is not positive definite.

use crate::MathError;
use ndarray::Array2;

/// Lower-triangular Cholesky factor of a symmetric positive definite matrix.
#[derive(Debug, Clone)]
pub struct CholeskyFactor {
    lower: Array2<f64>,
}

impl CholeskyFactor {
    /// Factor a symmetric positive definite matrix as A = L L^T.
    ///
    /// Only the lower triangle of the input is read; the strict upper
    /// triangle is assumed to mirror it.
    ///
    /// # Errors
    /// * `MathError::NonSquare` if the input is not square.
    /// * `MathError::NotPositiveDefinite` if a pivot is not strictly
    ///   positive (or not finite).
    pub fn decompose(matrix: &Array2<f64>) -> Result<Self, MathError> {
        let n = matrix.nrows();
        if n != matrix.ncols() {
            return Err(MathError::NonSquare {
                rows: n,
                cols: matrix.ncols(),
            });
        }

        let mut lower = Array2::<f64>::zeros((n, n));
        for j in 0..n {
            let mut pivot = matrix[[j, j]];
            for k in 0..j {
                pivot -= lower[[j, k]] * lower[[j, k]];
            }
            if pivot <= 0.0 || !pivot.is_finite() {
                return Err(MathError::NotPositiveDefinite);
            }
            let root = pivot.sqrt();
            lower[[j, j]] = root;

            for i in (j + 1)..n {
                let mut sum = matrix[[i, j]];
                for k in 0..j {
                    sum -= lower[[i, k]] * lower[[j, k]];
                }
                lower[[i, j]] = sum / root;
            }
        }

        Ok(Self { lower })
    }

    /// Dimension n of the factored n×n matrix.
    pub fn dimension(&self) -> usize {
        self.lower.nrows()
    }

    /// The lower-triangular factor L.
    pub const fn lower(&self) -> &Array2<f64> {
        &self.lower
    }

    /// Log-determinant of the factored matrix: 2 * sum of ln(L_ii).
    pub fn log_det(&self) -> f64 {
        let mut sum = 0.0;
        for i in 0..self.lower.nrows() {
            sum += self.lower[[i, i]].ln();
        }
        2.0 * sum
    }

    /// Inverse of the factored matrix: A^{-1} = L^{-T} L^{-1}.
    ///
    /// The result is exactly symmetric (each entry is written to both
    /// triangles from a single computed value).
    pub fn inverse(&self) -> Array2<f64> {
        let n = self.lower.nrows();

        // Invert L by forward substitution, one column at a time.
        let mut linv = Array2::<f64>::zeros((n, n));
        for j in 0..n {
            linv[[j, j]] = 1.0 / self.lower[[j, j]];
            for i in (j + 1)..n {
                let mut sum = 0.0;
                for k in j..i {
                    sum += self.lower[[i, k]] * linv[[k, j]];
                }
                linv[[i, j]] = -sum / self.lower[[i, i]];
            }
        }

        // A^{-1}_{ij} = sum_k L^{-1}_{ki} L^{-1}_{kj}; L^{-1} is lower
        // triangular, so only k >= max(i, j) contributes.
        let mut inverse = Array2::<f64>::zeros((n, n));
        for i in 0..n {
            for j in 0..=i {
                let mut sum = 0.0;
                for k in i..n {
                    sum += linv[[k, i]] * linv[[k, j]];
                }
                inverse[[i, j]] = sum;
                inverse[[j, i]] = sum;
            }
        }

        inverse
    }
}

/// Check positive definiteness via Cholesky factorization.
pub fn is_positive_definite(matrix: &Array2<f64>) -> bool {
    CholeskyFactor::decompose(matrix).is_ok()
}
