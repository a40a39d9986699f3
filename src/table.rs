use crate::error::ChartError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Required CSV column names, as written by the benchmark harness.
pub const COL_ALGORITHM: &str = "Algoritmo";
pub const COL_SIZE: &str = "Tamanho";
pub const COL_TIME: &str = "Tempo";

/// One row of the results table.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    #[serde(rename = "Algoritmo")]
    pub algorithm: String,
    /// Input size for the measurement.
    #[serde(rename = "Tamanho")]
    pub size: u64,
    /// Measured execution time in seconds.
    #[serde(rename = "Tempo")]
    pub time: f64,
}

/// All points for one algorithm, sorted by input size ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(u64, f64)>,
}

/// Benchmark results as read from disk. Read once, never mutated.
#[derive(Debug)]
pub struct ResultsTable {
    pub records: Vec<Record>,
}

impl ResultsTable {
    /// Load and validate a results CSV. Fails fast on a missing file,
    /// missing columns, unparsable rows, or an empty table (no axis range
    /// can be inferred from zero rows).
    pub fn from_csv(path: &Path) -> Result<Self, ChartError> {
        if !path.exists() {
            return Err(ChartError::FileNotFound(path.to_path_buf()));
        }

        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| ChartError::malformed(path, e.to_string()))?;

        let headers = reader
            .headers()
            .map_err(|e| ChartError::malformed(path, e.to_string()))?;
        for required in [COL_ALGORITHM, COL_SIZE, COL_TIME] {
            if !headers.iter().any(|h| h == required) {
                return Err(ChartError::malformed(
                    path,
                    format!("missing required column '{}'", required),
                ));
            }
        }

        let mut records = Vec::new();
        for (idx, row) in reader.deserialize::<Record>().enumerate() {
            // Line 1 is the header row.
            let line = idx + 2;
            let record =
                row.map_err(|e| ChartError::malformed(path, format!("line {}: {}", line, e)))?;
            if !record.time.is_finite() || record.time < 0.0 {
                return Err(ChartError::malformed(
                    path,
                    format!(
                        "line {}: '{}' must be a non-negative number, got {}",
                        line, COL_TIME, record.time
                    ),
                ));
            }
            records.push(record);
        }

        if records.is_empty() {
            return Err(ChartError::malformed(path, "table has no data rows"));
        }

        Ok(Self { records })
    }

    /// Group records into one series per algorithm, in first-seen label
    /// order. Points are sorted by size ascending; the sort is stable, so
    /// duplicate sizes keep their file order and plot as separate points.
    pub fn series(&self) -> Vec<Series> {
        let mut order: Vec<&str> = Vec::new();
        let mut groups: HashMap<&str, Vec<(u64, f64)>> = HashMap::new();

        for record in &self.records {
            let label = record.algorithm.as_str();
            if !groups.contains_key(label) {
                order.push(label);
            }
            groups
                .entry(label)
                .or_default()
                .push((record.size, record.time));
        }

        order
            .into_iter()
            .map(|label| {
                let mut points = groups.remove(label).unwrap_or_default();
                points.sort_by_key(|&(size, _)| size);
                Series {
                    label: label.to_string(),
                    points,
                }
            })
            .collect()
    }
}
