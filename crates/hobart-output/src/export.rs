//! CSV and JSON export of estimated precision matrices.
//!
//! CSV output is a flat table of the nonzero entries of every estimate in
//! the sweep (budget, row, col, value); zero entries are implied. JSON
//! output carries each estimate's full matrix as nested arrays.

use hobart_estimation::SparseEstimate;
use serde::{Deserialize, Serialize};
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values, nonzero entries only.
    Csv,

    /// Compact JSON.
    Json,

    /// Pretty-printed JSON.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

/// One nonzero entry of an estimate, as a flat CSV record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrecisionEntryExport {
    /// Budget of the estimate this entry belongs to.
    pub budget: f64,
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
    /// Entry value.
    pub value: f64,
}

/// One whole estimate, as a JSON-friendly record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EstimateExport {
    /// The sparsity budget.
    pub budget: f64,
    /// Dimension n.
    pub dimension: usize,
    /// The n×n precision matrix, row by row.
    pub precision: Vec<Vec<f64>>,
}

impl EstimateExport {
    /// Convert one estimate.
    pub fn from_estimate(estimate: &SparseEstimate) -> Self {
        Self {
            budget: estimate.budget,
            dimension: estimate.dimension(),
            precision: estimate
                .precision
                .rows()
                .into_iter()
                .map(|row| row.to_vec())
                .collect(),
        }
    }
}

/// Writes a budget sweep in a chosen format.
#[derive(Debug)]
pub struct Exporter {
    format: ExportFormat,
}

impl Exporter {
    /// Exporter for the given format.
    pub const fn new(format: ExportFormat) -> Self {
        Self { format }
    }

    /// Write all estimates to the writer.
    ///
    /// # Errors
    /// Serialization and IO failures; see [`ExportError`].
    pub fn export<W: Write>(
        &self,
        estimates: &[SparseEstimate],
        writer: W,
    ) -> Result<(), ExportError> {
        match self.format {
            ExportFormat::Csv => write_csv(estimates, writer),
            ExportFormat::Json => {
                let records: Vec<EstimateExport> =
                    estimates.iter().map(EstimateExport::from_estimate).collect();
                serde_json::to_writer(writer, &records)?;
                Ok(())
            }
            ExportFormat::PrettyJson => {
                let records: Vec<EstimateExport> =
                    estimates.iter().map(EstimateExport::from_estimate).collect();
                serde_json::to_writer_pretty(writer, &records)?;
                Ok(())
            }
        }
    }
}

fn write_csv<W: Write>(estimates: &[SparseEstimate], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for estimate in estimates {
        let n = estimate.dimension();
        for row in 0..n {
            for col in 0..n {
                let value = estimate.precision[[row, col]];
                if value != 0.0 {
                    csv_writer.serialize(PrecisionEntryExport {
                        budget: estimate.budget,
                        row,
                        col,
                        value,
                    })?;
                }
            }
        }
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn sweep() -> Vec<SparseEstimate> {
        vec![
            SparseEstimate {
                budget: 2.0,
                precision: Array2::from_shape_vec((2, 2), vec![1.0, 0.5, 0.5, 1.0]).unwrap(),
            },
            SparseEstimate {
                budget: 1.0,
                precision: Array2::from_shape_vec((2, 2), vec![0.5, 0.0, 0.0, 0.5]).unwrap(),
            },
        ]
    }

    #[test]
    fn test_extension() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::PrettyJson.extension(), "json");
    }

    #[test]
    fn test_csv_export_writes_only_nonzero_entries() {
        let mut buffer = Vec::new();
        Exporter::new(ExportFormat::Csv)
            .export(&sweep(), &mut buffer)
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        // Header plus 4 nonzero entries from the first estimate and 2 from
        // the second.
        assert_eq!(lines[0], "budget,row,col,value");
        assert_eq!(lines.len(), 1 + 4 + 2);
        assert!(lines.iter().any(|l| *l == "2.0,0,1,0.5"));
        assert!(!text.contains("1.0,0,1"));
    }

    #[test]
    fn test_json_round_trip() {
        let mut buffer = Vec::new();
        Exporter::new(ExportFormat::Json)
            .export(&sweep(), &mut buffer)
            .unwrap();
        let records: Vec<EstimateExport> = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].budget, 2.0);
        assert_eq!(records[0].precision[0][1], 0.5);
        assert_eq!(records[1].precision[0][1], 0.0);
    }

    #[test]
    fn test_pretty_json_parses() {
        let mut buffer = Vec::new();
        Exporter::new(ExportFormat::PrettyJson)
            .export(&sweep(), &mut buffer)
            .unwrap();
        let records: Vec<EstimateExport> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(records.len(), 2);
    }
}
