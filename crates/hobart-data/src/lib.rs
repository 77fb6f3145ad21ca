#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hobart-stats/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod covariance;
pub mod scenario;

pub use covariance::sample_covariance;
pub use scenario::{GaussianScenario, ScenarioConfig, generate_scenario};

use thiserror::Error;

/// Errors that can occur during data generation.
#[derive(Debug, Error)]
pub enum DataError {
    /// Sample set has no rows
    #[error("Sample set must contain at least one sample")]
    EmptySampleSet,

    /// Requested dimension is zero
    #[error("Dimension must be at least 1, got {dimension}")]
    InvalidDimension {
        /// The offending dimension
        dimension: usize,
    },

    /// Requested sample count is zero
    #[error("Sample count must be at least 1, got {count}")]
    InvalidSampleCount {
        /// The offending count
        count: usize,
    },

    /// Off-diagonal density outside [0, 1)
    #[error("Off-diagonal density must be in [0, 1), got {density}")]
    InvalidDensity {
        /// The offending density
        density: f64,
    },

    /// A matrix kernel failed
    #[error("Math error: {0}")]
    Math(#[from] hobart_math::MathError),
}
