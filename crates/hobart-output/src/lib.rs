#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hobart-stats/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod summary;

pub use export::{EstimateExport, ExportError, ExportFormat, Exporter, PrecisionEntryExport};
pub use summary::{SparsitySummary, summarize_sweep};
