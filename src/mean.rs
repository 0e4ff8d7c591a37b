use std::fmt;

use serde::Serialize;

use crate::{BuildBenchError, record::ResultRecord};

pub const MEAN_COLUMN: &str = "mean";
pub const DEFAULT_ITERATIONS: usize = 10;

pub fn measured_column(k: usize) -> String {
    format!("measured build #{k}")
}

/// How a representative build time is derived from a result record.
/// Selected once when the reporter is configured.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MeanStrategy {
    /// Take the precomputed `mean` column verbatim.
    #[default]
    MeanColumn,
    /// Average the integer `measured build #1` .. `#N` columns.
    MeasuredColumns { iterations: usize },
}

impl MeanStrategy {
    pub fn derive(&self, record: &ResultRecord) -> Result<MeanValue, BuildBenchError> {
        match self {
            MeanStrategy::MeanColumn => {
                Ok(MeanValue::Text(record.get(MEAN_COLUMN)?.to_string()))
            }
            MeanStrategy::MeasuredColumns { iterations } => {
                if *iterations == 0 {
                    return Err(BuildBenchError::invalid_value(
                        "iteration count must exceed 0",
                    ));
                }
                let mut total: i64 = 0;
                for k in 1..=*iterations {
                    let column = measured_column(k);
                    let raw = record.get(&column)?;
                    let value: i64 = raw.parse().map_err(|_| {
                        BuildBenchError::invalid_value(format!(
                            "{column}: expected an integer, got {raw:?}"
                        ))
                    })?;
                    total += value;
                }
                Ok(MeanValue::Number(total as f64 / *iterations as f64))
            }
        }
    }
}

/// A derived build time. `Text` carries a `mean` column value untouched,
/// `Number` carries a computed average.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MeanValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for MeanValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeanValue::Text(value) => f.write_str(value),
            MeanValue::Number(value) => write!(f, "{value}"),
        }
    }
}
