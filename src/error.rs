use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a chart run. None of these are recovered
/// internally; they propagate to the caller.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("malformed table in {}: {reason}", path.display())]
    MalformedTable { path: PathBuf, reason: String },

    #[error("failed to write chart to {}: {reason}", path.display())]
    WriteFailure { path: PathBuf, reason: String },
}

impl ChartError {
    pub(crate) fn malformed(path: &std::path::Path, reason: impl Into<String>) -> Self {
        Self::MalformedTable {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub(crate) fn write_failure(path: &std::path::Path, err: impl std::fmt::Display) -> Self {
        Self::WriteFailure {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    }
}
