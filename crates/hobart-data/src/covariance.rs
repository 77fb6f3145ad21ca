//! Zero-mean sample covariance.

use crate::DataError;
use ndarray::Array2;

/// Sample covariance of zero-mean samples: Y = XᵀX / N.
///
/// Samples are rows of `samples` (N × n). The data model is zero-mean, so
/// no centering is applied. Both triangles of the result are written from
/// a single accumulated value, so the returned matrix is exactly
/// symmetric.
///
/// # Errors
/// * [`DataError::EmptySampleSet`] if there are no samples.
/// * [`DataError::InvalidDimension`] if the samples have no columns.
pub fn sample_covariance(samples: &Array2<f64>) -> Result<Array2<f64>, DataError> {
    let (sample_count, dimension) = samples.dim();
    if sample_count == 0 {
        return Err(DataError::EmptySampleSet);
    }
    if dimension == 0 {
        return Err(DataError::InvalidDimension { dimension });
    }

    let normalizer = sample_count as f64;
    let mut covariance = Array2::<f64>::zeros((dimension, dimension));
    for i in 0..dimension {
        for j in 0..=i {
            let mut sum = 0.0;
            for t in 0..sample_count {
                sum += samples[[t, i]] * samples[[t, j]];
            }
            let value = sum / normalizer;
            covariance[[i, j]] = value;
            covariance[[j, i]] = value;
        }
    }

    Ok(covariance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{ScenarioConfig, generate_scenario};
    use approx::assert_relative_eq;

    #[test]
    fn test_known_sample_covariance() {
        let samples =
            Array2::from_shape_vec((3, 2), vec![1.0, 2.0, 2.0, 4.0, 3.0, 6.0]).unwrap();
        let cov = sample_covariance(&samples).unwrap();

        // XᵀX / 3 = [[14, 28], [28, 56]] / 3
        assert_relative_eq!(cov[[0, 0]], 14.0 / 3.0, epsilon = 1e-10);
        assert_relative_eq!(cov[[0, 1]], 28.0 / 3.0, epsilon = 1e-10);
        assert_relative_eq!(cov[[1, 0]], 28.0 / 3.0, epsilon = 1e-10);
        assert_relative_eq!(cov[[1, 1]], 56.0 / 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_empty_sample_set_rejected() {
        let samples = Array2::<f64>::zeros((0, 3));
        assert!(matches!(
            sample_covariance(&samples),
            Err(DataError::EmptySampleSet)
        ));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let samples = Array2::<f64>::zeros((5, 0));
        assert!(matches!(
            sample_covariance(&samples),
            Err(DataError::InvalidDimension { dimension: 0 })
        ));
    }

    #[test]
    fn test_result_is_exactly_symmetric() {
        let scenario = generate_scenario(&ScenarioConfig {
            dimension: 5,
            sample_count: 50,
            ..Default::default()
        })
        .unwrap();
        let cov = sample_covariance(&scenario.samples).unwrap();
        for i in 0..5 {
            for j in 0..5 {
                assert_eq!(cov[[i, j]], cov[[j, i]]);
            }
        }
    }

    #[test]
    fn test_approaches_true_covariance() {
        let scenario = generate_scenario(&ScenarioConfig {
            sample_count: 4000,
            ..Default::default()
        })
        .unwrap();
        let cov = sample_covariance(&scenario.samples).unwrap();

        let mut max_error = 0.0_f64;
        for i in 0..10 {
            for j in 0..10 {
                max_error = max_error.max((cov[[i, j]] - scenario.true_covariance[[i, j]]).abs());
            }
        }
        assert!(max_error < 0.25, "sample covariance off by {max_error}");
    }
}
