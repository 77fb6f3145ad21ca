//! Symmetry helpers and entrywise norms for square matrices.

use ndarray::Array2;

/// Largest absolute deviation from symmetry: max over (i, j) of |M_ij - M_ji|.
///
/// Returns 0.0 for a perfectly symmetric matrix and for matrices of
/// dimension 0 or 1.
pub fn max_asymmetry(matrix: &Array2<f64>) -> f64 {
    let n = matrix.nrows();
    let mut max_dev = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            let dev = (matrix[[i, j]] - matrix[[j, i]]).abs();
            if dev > max_dev {
                max_dev = dev;
            }
        }
    }
    max_dev
}

/// Check symmetry within an absolute tolerance.
///
/// Non-square matrices are never symmetric.
pub fn is_symmetric(matrix: &Array2<f64>, tolerance: f64) -> bool {
    if matrix.nrows() != matrix.ncols() {
        return false;
    }
    max_asymmetry(matrix) <= tolerance
}

/// Symmetrize a square matrix by averaging with its transpose: (M + M^T) / 2.
///
/// For an already-symmetric matrix every entry is reproduced exactly,
/// since (a + a) / 2 == a in IEEE arithmetic.
pub fn symmetrize(matrix: &Array2<f64>) -> Array2<f64> {
    (matrix + &matrix.t()) / 2.0
}

/// Entrywise L1 norm: the sum of absolute values of all entries.
pub fn entrywise_l1(matrix: &Array2<f64>) -> f64 {
    matrix.iter().map(|v| v.abs()).sum()
}

/// Frobenius norm: the square root of the sum of squared entries.
pub fn frobenius_norm(matrix: &Array2<f64>) -> f64 {
    matrix.iter().map(|v| v * v).sum::<f64>().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_max_asymmetry_symmetric() {
        let m = Array2::from_shape_vec((2, 2), vec![1.0, 0.5, 0.5, 2.0]).unwrap();
        assert_eq!(max_asymmetry(&m), 0.0);
    }

    #[test]
    fn test_max_asymmetry_detects_deviation() {
        let m = Array2::from_shape_vec((2, 2), vec![1.0, 0.5, 0.7, 2.0]).unwrap();
        assert_abs_diff_eq!(max_asymmetry(&m), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_is_symmetric_non_square() {
        let m = Array2::<f64>::zeros((2, 3));
        assert!(!is_symmetric(&m, 1.0));
    }

    #[test]
    fn test_symmetrize_preserves_symmetric_entries_exactly() {
        let m = Array2::from_shape_vec((2, 2), vec![1.0, 0.1 + 0.2, 0.1 + 0.2, 2.0]).unwrap();
        let s = symmetrize(&m);
        // Bit-for-bit: (a + a) / 2 == a.
        assert_eq!(s[[0, 1]], m[[0, 1]]);
        assert_eq!(s[[1, 0]], m[[1, 0]]);
    }

    #[test]
    fn test_symmetrize_averages() {
        let m = Array2::from_shape_vec((2, 2), vec![1.0, 0.4, 0.6, 2.0]).unwrap();
        let s = symmetrize(&m);
        assert_abs_diff_eq!(s[[0, 1]], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(s[[1, 0]], 0.5, epsilon = 1e-12);
        assert_eq!(s[[0, 0]], 1.0);
        assert_eq!(s[[1, 1]], 2.0);
    }

    #[test]
    fn test_entrywise_l1() {
        let m = Array2::from_shape_vec((2, 2), vec![1.0, -2.0, 3.0, -4.0]).unwrap();
        assert_abs_diff_eq!(entrywise_l1(&m), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_frobenius_norm() {
        let m = Array2::from_shape_vec((2, 2), vec![3.0, 0.0, 0.0, 4.0]).unwrap();
        assert_abs_diff_eq!(frobenius_norm(&m), 5.0, epsilon = 1e-12);
    }
}
