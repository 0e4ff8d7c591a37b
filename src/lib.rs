//! Build-time benchmark comparison between a base branch and a head branch.
//! Reads one CSV result file per build variant, derives a mean build time
//! for each, and emits a one-line comparison to stdout and a result file.

pub mod errors;
pub mod mean;
pub mod record;
pub mod report;

pub use crate::errors::BuildBenchError;
pub use crate::mean::{MeanStrategy, MeanValue};
pub use crate::record::ResultRecord;
pub use crate::report::{BenchmarkReporter, ComparisonResult, ReporterConfig};
