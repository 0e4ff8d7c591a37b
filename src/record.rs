use std::path::Path;

use crate::BuildBenchError;

/// One benchmark result row, keyed by the column names from the header row.
/// Column order is preserved as written in the file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultRecord {
    columns: Vec<(String, String)>,
}

impl ResultRecord {
    /// Reads the header row and the first data row of a CSV file.
    /// Surrounding whitespace is stripped from both names and values.
    /// Rows beyond the first data row are ignored.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BuildBenchError> {
        let path = path.as_ref();
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| BuildBenchError::io(e.to_string()))?;
        let headers = reader
            .headers()
            .map_err(|e| BuildBenchError::malformed(e.to_string()))?
            .clone();
        let row = match reader.records().next() {
            Some(row) => row.map_err(|e| BuildBenchError::malformed(e.to_string()))?,
            None => {
                return Err(BuildBenchError::malformed(format!(
                    "{}: header row without a data row",
                    path.display()
                )));
            }
        };
        let columns = headers
            .iter()
            .zip(row.iter())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        Ok(Self { columns })
    }

    pub fn from_columns(columns: Vec<(String, String)>) -> Self {
        Self { columns }
    }

    pub fn get(&self, name: &str) -> Result<&str, BuildBenchError> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, value)| value.as_str())
            .ok_or_else(|| BuildBenchError::missing_column(name))
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
