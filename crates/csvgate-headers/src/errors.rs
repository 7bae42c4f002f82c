use std::path::PathBuf;
use thiserror::Error;

pub type CsvResult<T> = Result<T, CsvError>;

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("Failed to read header of {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("File discovery failed: {0}")]
    Discovery(#[from] glob::GlobError),

    #[error("No CSV files found matching {0}")]
    NoFilesFound(String),

    #[error("No required columns given (input was '{0}')")]
    NoRequiredColumns(String),

    #[error("Invalid delimiter '{0}': expected a single ASCII character")]
    InvalidDelimiter(String),

    #[error("Failed to write report {}: {source}", .path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CsvError {
    /// Errors caused by how the gate was invoked rather than by the data.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            CsvError::InvalidPattern { .. }
                | CsvError::NoRequiredColumns(_)
                | CsvError::InvalidDelimiter(_)
        )
    }
}
