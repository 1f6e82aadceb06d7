// Error types for chart construction
use thiserror::Error;

/// Errors that abort a chart build.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Data load error: {0}")]
    DataLoad(String),

    #[error("Empty dataset: {0}")]
    EmptyDataset(String),
}

/// A single malformed field in one row. Recovered per-record: the row is
/// dropped with a warning, the load continues.
#[derive(Debug, Error)]
#[error("row {row}: bad {field}: {reason}")]
pub struct FieldParseError {
    pub row: usize,
    pub field: &'static str,
    pub reason: String,
}

impl FieldParseError {
    pub fn new(row: usize, field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            row,
            field,
            reason: reason.into(),
        }
    }
}
