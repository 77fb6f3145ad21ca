//! Construction of the sparse precision-matrix recovery program.
//!
//! For a sample covariance Y of a zero-mean Gaussian vector and a sparsity
//! budget α, the program over the symmetric n×n variable S is:
//!
//! maximize    log det(S) - tr(S Y)
//! subject to  S ⪰ 0  (positive semidefinite cone)
//!             Σ_ij |S_ij| ≤ α
//!
//! The problem is convex: log det is concave on the PSD cone and is being
//! maximized, -tr(S Y) is linear in S, and the entrywise L1 ball is a convex
//! set. Without the budget constraint the maximizer is the inverse of Y
//! (the maximum-likelihood precision estimate); the constraint trades
//! likelihood for entrywise sparsity.
//!
//! This module only assembles and validates the problem description; all
//! numerical work happens in the solver it is handed to.

use crate::error::{EstimationError, Result};
use hobart_math::max_asymmetry;
use ndarray::Array2;

/// Relative tolerance for the symmetry check on the sample covariance.
const SYMMETRY_TOLERANCE: f64 = 1e-8;

/// A validated instance of the precision-recovery program.
///
/// Immutable once constructed; owns its copy of the sample covariance so a
/// solver can hold the problem without borrowing pipeline state.
#[derive(Debug, Clone)]
pub struct PrecisionProblem {
    sample_covariance: Array2<f64>,
    budget: f64,
}

impl PrecisionProblem {
    /// Build the program for the given sample covariance and budget.
    ///
    /// # Errors
    /// * [`EstimationError::EmptyCovariance`] if the matrix has dimension 0.
    /// * [`EstimationError::NonSquareCovariance`] if it is not square.
    /// * [`EstimationError::AsymmetricCovariance`] if it deviates from
    ///   symmetry by more than a small tolerance relative to its magnitude.
    /// * [`EstimationError::NonPositiveBudget`] if the budget is not a
    ///   positive finite number.
    pub fn new(sample_covariance: Array2<f64>, budget: f64) -> Result<Self> {
        let (rows, cols) = sample_covariance.dim();
        if rows == 0 || cols == 0 {
            return Err(EstimationError::EmptyCovariance);
        }
        if rows != cols {
            return Err(EstimationError::NonSquareCovariance { rows, cols });
        }

        let scale = sample_covariance
            .iter()
            .fold(0.0_f64, |acc, v| acc.max(v.abs()));
        let max_deviation = max_asymmetry(&sample_covariance);
        if max_deviation > SYMMETRY_TOLERANCE * scale.max(1.0) {
            return Err(EstimationError::AsymmetricCovariance { max_deviation });
        }

        if !budget.is_finite() || budget <= 0.0 {
            return Err(EstimationError::NonPositiveBudget { budget });
        }

        Ok(Self {
            sample_covariance,
            budget,
        })
    }

    /// Dimension n of the n×n matrix variable.
    pub fn dimension(&self) -> usize {
        self.sample_covariance.nrows()
    }

    /// The sample covariance Y appearing in the trace term.
    pub const fn sample_covariance(&self) -> &Array2<f64> {
        &self.sample_covariance
    }

    /// The bound α on the entrywise L1 norm of the variable.
    pub const fn budget(&self) -> f64 {
        self.budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn valid_covariance() -> Array2<f64> {
        Array2::from_shape_vec((2, 2), vec![2.0, 0.3, 0.3, 1.0]).unwrap()
    }

    #[test]
    fn test_valid_problem() {
        let problem = PrecisionProblem::new(valid_covariance(), 5.0).unwrap();
        assert_eq!(problem.dimension(), 2);
        assert_eq!(problem.budget(), 5.0);
        assert_eq!(problem.sample_covariance()[[0, 1]], 0.3);
    }

    #[test]
    fn test_empty_covariance_rejected() {
        let err = PrecisionProblem::new(Array2::<f64>::zeros((0, 0)), 1.0).unwrap_err();
        assert!(matches!(err, EstimationError::EmptyCovariance));
    }

    #[test]
    fn test_non_square_rejected() {
        let err = PrecisionProblem::new(Array2::<f64>::zeros((2, 3)), 1.0).unwrap_err();
        assert!(matches!(
            err,
            EstimationError::NonSquareCovariance { rows: 2, cols: 3 }
        ));
    }

    #[test]
    fn test_asymmetric_rejected() {
        let y = Array2::from_shape_vec((2, 2), vec![1.0, 0.5, 0.1, 1.0]).unwrap();
        let err = PrecisionProblem::new(y, 1.0).unwrap_err();
        assert!(matches!(err, EstimationError::AsymmetricCovariance { .. }));
    }

    #[test]
    fn test_tiny_asymmetry_tolerated() {
        let mut y = valid_covariance();
        y[[0, 1]] += 1e-12;
        assert!(PrecisionProblem::new(y, 1.0).is_ok());
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::NEG_INFINITY)]
    #[case(f64::INFINITY)]
    fn test_invalid_budget_rejected(#[case] budget: f64) {
        let err = PrecisionProblem::new(valid_covariance(), budget).unwrap_err();
        assert!(matches!(err, EstimationError::NonPositiveBudget { .. }));
    }

    #[test]
    fn test_dimension_one_accepted() {
        let y = Array2::from_shape_vec((1, 1), vec![2.0]).unwrap();
        let problem = PrecisionProblem::new(y, 0.5).unwrap();
        assert_eq!(problem.dimension(), 1);
    }
}
