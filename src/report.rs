use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::{
    BuildBenchError,
    mean::{MeanStrategy, MeanValue},
    record::ResultRecord,
};

pub const BASE_RESULT_PATH: &str = "profile-out/benchmark.csv";
pub const HEAD_RESULT_PATH: &str = "profile-out-head/benchmark.csv";
pub const OUTPUT_PATH: &str = "benchmark-result.txt";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReporterConfig {
    pub base_path: PathBuf,
    pub head_path: PathBuf,
    pub output_path: PathBuf,
    pub strategy: MeanStrategy,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from(BASE_RESULT_PATH),
            head_path: PathBuf::from(HEAD_RESULT_PATH),
            output_path: PathBuf::from(OUTPUT_PATH),
            strategy: MeanStrategy::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub base: MeanValue,
    pub head: MeanValue,
}

impl ComparisonResult {
    pub fn line(&self) -> String {
        format!(
            "Branch Head Build Time: {} | Base Branch Build Time: {}",
            self.head, self.base
        )
    }
}

pub struct BenchmarkReporter {
    config: ReporterConfig,
}

impl BenchmarkReporter {
    pub fn new(config: ReporterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReporterConfig {
        &self.config
    }

    pub fn load_result(&self, path: &Path) -> Result<MeanValue, BuildBenchError> {
        let record = ResultRecord::from_path(path)?;
        self.config.strategy.derive(&record)
    }

    pub fn compare(&self) -> Result<ComparisonResult, BuildBenchError> {
        let base = self.load_result(&self.config.base_path)?;
        let head = self.load_result(&self.config.head_path)?;
        Ok(ComparisonResult { base, head })
    }

    /// Runs the whole pipeline: load both results, print the comparison
    /// line to stdout, then overwrite the output file with the same line.
    /// The output file is not touched unless both inputs parsed.
    pub fn report(&self) -> Result<ComparisonResult, BuildBenchError> {
        let comparison = self.compare()?;
        let line = comparison.line();
        println!("{line}");
        fs::write(&self.config.output_path, format!("{line}\n"))
            .map_err(|e| BuildBenchError::io(e.to_string()))?;
        Ok(comparison)
    }
}
