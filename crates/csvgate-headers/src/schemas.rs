/*!
# Header Validation Data Model

Types produced by a single validation run. Everything here is built once per run
and serialized into the JSON report; field order of the serialized structs is the
report's field order.
*/

use crate::errors::{CsvError, CsvResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory scanned when no explicit glob is given
pub const DEFAULT_DATA_DIR: &str = "data";

/// File pattern used inside [`DEFAULT_DATA_DIR`] (or any `--data-dir`)
pub const DEFAULT_CSV_PATTERN: &str = "*.csv";

/// Where the JSON summary lands unless `--out` says otherwise
pub const DEFAULT_REPORT_PATH: &str = "report/data_quality_summary.json";

// ================================================================================================
// Required Columns
// ================================================================================================

/// Column names every validated file must contain.
///
/// Order is kept so that missing columns are always reported in the order they
/// were requested. Duplicates are kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequiredColumns(Vec<String>);

impl RequiredColumns {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(columns.into_iter().map(Into::into).collect())
    }

    /// Parse a comma-separated list, trimming each token and dropping empty ones.
    ///
    /// A list that is empty after trimming is rejected: a gate with nothing to
    /// check always passes, which is never what the caller meant.
    pub fn parse(input: &str) -> CsvResult<Self> {
        let columns: Vec<String> = input
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();

        if columns.is_empty() {
            return Err(CsvError::NoRequiredColumns(input.to_string()));
        }

        Ok(Self(columns))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Required columns absent from `header`, in requested order.
    pub fn missing_from(&self, header: &Header) -> Vec<String> {
        self.0
            .iter()
            .filter(|column| !header.contains(column))
            .cloned()
            .collect()
    }
}

// ================================================================================================
// Header
// ================================================================================================

/// First row of a CSV file. Empty when the file has no rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Header(Vec<String>);

impl Header {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(cells.into_iter().map(Into::into).collect())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, column: &str) -> bool {
        self.0.iter().any(|cell| cell == column)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Header {
    fn from(cells: Vec<String>) -> Self {
        Self(cells)
    }
}

// ================================================================================================
// Per-file Result
// ================================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub file: PathBuf,
    pub header: Header,
    pub missing_required_columns: Vec<String>,
    pub missing_count: usize,
}

impl FileRecord {
    pub fn new(file: PathBuf, header: Header, required: &RequiredColumns) -> Self {
        let missing_required_columns = required.missing_from(&header);
        let missing_count = missing_required_columns.len();

        Self {
            file,
            header,
            missing_required_columns,
            missing_count,
        }
    }

    pub fn has_missing(&self) -> bool {
        !self.missing_required_columns.is_empty()
    }
}

// ================================================================================================
// Summary
// ================================================================================================

/// Aggregate result of one validation run; serialized verbatim as the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub checked_files: Vec<PathBuf>,
    pub required_columns: RequiredColumns,
    pub per_file: Vec<FileRecord>,
    pub missing_columns_detected: bool,
    pub inconsistent_headers_detected: bool,
    pub reference_header: Option<Header>,
}

impl Summary {
    pub fn files_with_missing(&self) -> impl Iterator<Item = &FileRecord> {
        self.per_file.iter().filter(|record| record.has_missing())
    }

    /// Files whose header differs from the reference header.
    pub fn inconsistent_files(&self) -> impl Iterator<Item = &FileRecord> {
        self.per_file
            .iter()
            .filter(move |record| self.reference_header.as_ref() != Some(&record.header))
    }

    pub fn verdict(&self, strict_headers: bool) -> Verdict {
        if self.missing_columns_detected {
            Verdict::Fail
        } else if self.inconsistent_headers_detected {
            if strict_headers {
                Verdict::Fail
            } else {
                Verdict::PassWithWarnings
            }
        } else {
            Verdict::Pass
        }
    }
}

// ================================================================================================
// Exit Policy
// ================================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    /// Headers disagree across files but every required column is present
    PassWithWarnings,
    Fail,
}

impl Verdict {
    pub fn exit_code(self) -> u8 {
        match self {
            Verdict::Pass | Verdict::PassWithWarnings => 0,
            Verdict::Fail => 1,
        }
    }
}

/// What to do when discovery finds no files at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyFileSetPolicy {
    /// Abort with [`CsvError::NoFilesFound`] before any report is written
    Fail,
    /// Validate the empty set, producing a vacuous passing summary
    Pass,
}
