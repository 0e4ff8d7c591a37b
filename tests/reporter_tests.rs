use std::{
    env, fs,
    path::{Path, PathBuf},
};

use buildbench::{BenchmarkReporter, BuildBenchError, MeanStrategy, ReporterConfig};

const EXPECTED_LINE: &str = "Branch Head Build Time: 15.7 | Base Branch Build Time: 12.3";

#[test]
fn test_report_formats_head_then_base() {
    let dir = temp_dir("buildbench_report_format");
    let reporter = BenchmarkReporter::new(mean_config(&dir, "12.3", "15.7"));
    let comparison = reporter.report().expect("report");
    assert_eq!(comparison.line(), EXPECTED_LINE);
}

#[test]
fn test_report_output_file_matches_printed_line() {
    let dir = temp_dir("buildbench_report_output");
    let config = mean_config(&dir, "12.3", "15.7");
    let output_path = config.output_path.clone();
    BenchmarkReporter::new(config).report().expect("report");
    let written = fs::read_to_string(&output_path).expect("output file");
    assert_eq!(written, format!("{EXPECTED_LINE}\n"));
}

#[test]
fn test_report_is_idempotent() {
    let dir = temp_dir("buildbench_report_idempotent");
    let config = mean_config(&dir, "12.3", "15.7");
    let output_path = config.output_path.clone();
    let reporter = BenchmarkReporter::new(config);
    reporter.report().expect("first run");
    let first = fs::read(&output_path).expect("first output");
    reporter.report().expect("second run");
    let second = fs::read(&output_path).expect("second output");
    assert_eq!(first, second);
}

#[test]
fn test_report_missing_mean_column_leaves_output_untouched() {
    let dir = temp_dir("buildbench_report_missing_column");
    let config = ReporterConfig {
        base_path: write_csv(&dir, "base.csv", "longest\n20\n"),
        head_path: write_csv(&dir, "head.csv", "mean\n15.7\n"),
        output_path: dir.join("benchmark-result.txt"),
        strategy: MeanStrategy::MeanColumn,
    };
    fs::write(&config.output_path, "previous run\n").expect("seed output");
    let err = BenchmarkReporter::new(config.clone()).report().unwrap_err();
    assert!(matches!(err, BuildBenchError::MissingColumn(_)));
    let untouched = fs::read_to_string(&config.output_path).expect("output file");
    assert_eq!(untouched, "previous run\n");
}

#[test]
fn test_report_missing_input_file_aborts() {
    let dir = temp_dir("buildbench_report_missing_file");
    let config = ReporterConfig {
        base_path: dir.join("absent.csv"),
        head_path: write_csv(&dir, "head.csv", "mean\n15.7\n"),
        output_path: dir.join("benchmark-result.txt"),
        strategy: MeanStrategy::MeanColumn,
    };
    let err = BenchmarkReporter::new(config.clone()).report().unwrap_err();
    assert!(matches!(err, BuildBenchError::Io(_)));
    assert!(!config.output_path.exists());
}

#[test]
fn test_report_measured_strategy_end_to_end() {
    let dir = temp_dir("buildbench_report_measured");
    let config = ReporterConfig {
        base_path: write_csv(&dir, "base.csv", &measured_csv(1..=10)),
        head_path: write_csv(&dir, "head.csv", &measured_csv(11..=20)),
        output_path: dir.join("benchmark-result.txt"),
        strategy: MeanStrategy::MeasuredColumns { iterations: 10 },
    };
    let comparison = BenchmarkReporter::new(config).report().expect("report");
    assert_eq!(
        comparison.line(),
        "Branch Head Build Time: 15.5 | Base Branch Build Time: 5.5"
    );
}

#[test]
fn test_comparison_serializes_to_json() {
    let dir = temp_dir("buildbench_report_json");
    let reporter = BenchmarkReporter::new(mean_config(&dir, "12.3", "15.7"));
    let comparison = reporter.compare().expect("compare");
    let encoded = serde_json::to_string(&comparison).expect("encode");
    assert_eq!(encoded, r#"{"base":"12.3","head":"15.7"}"#);
}

fn temp_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

fn mean_config(dir: &Path, base: &str, head: &str) -> ReporterConfig {
    ReporterConfig {
        base_path: write_csv(dir, "base.csv", &format!("mean,longest\n{base},0\n")),
        head_path: write_csv(dir, "head.csv", &format!("mean,longest\n{head},0\n")),
        output_path: dir.join("benchmark-result.txt"),
        strategy: MeanStrategy::MeanColumn,
    }
}

fn measured_csv(values: std::ops::RangeInclusive<i64>) -> String {
    let values: Vec<i64> = values.collect();
    let header: Vec<String> = (1..=values.len())
        .map(|k| format!("measured build #{k}"))
        .collect();
    let row: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("{}\n{}\n", header.join(","), row.join(","))
}
