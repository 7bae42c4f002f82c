//! # csvgate Header Validation
//!
//! This crate is the pure core of the `csvgate` data-quality gate: given a sorted list
//! of CSV files and a set of required column names, it reads each file's header row,
//! checks that every required column is present, checks that all headers agree with
//! the first file's header, and folds the results into one [`Summary`].
//!
//! ## Capabilities
//!
//! Filesystem access sits behind two small traits so the core can be exercised
//! without touching disk:
//!
//! - [`PathLister`] expands a glob into paths ([`GlobPathLister`] in production)
//! - [`HeaderReader`] yields a file's first row ([`CsvHeaderReader`] in production)
//!
//! Plain closures implement both.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use csvgate_headers::{
//!     discover, validate, write_summary_report, CsvHeaderReader, CsvResult, FileSource,
//!     GlobPathLister, RequiredColumns,
//! };
//!
//! fn example() -> CsvResult<()> {
//!     let source = FileSource::Glob("data/*.csv".to_string());
//!     let files = discover(&GlobPathLister, &source, source.default_empty_policy())?;
//!     let required = RequiredColumns::parse("id,name")?;
//!
//!     let summary = validate(&files, &required, &CsvHeaderReader::default())?;
//!     write_summary_report("report/data_quality_summary.json", &summary)?;
//!
//!     std::process::exit(summary.verdict(false).exit_code().into());
//! }
//! ```

pub mod discovery;
pub mod errors;
pub mod reader;
pub mod report;
pub mod schemas;
pub mod validation;

// Re-export main types for convenience
pub use discovery::{discover, FileSource, GlobPathLister, PathLister};
pub use errors::{CsvError, CsvResult};
pub use reader::{parse_delimiter, CsvHeaderReader, HeaderReader};
pub use report::{render_summary_json, write_summary_report};
pub use schemas::{
    EmptyFileSetPolicy, FileRecord, Header, RequiredColumns, Summary, Verdict,
    DEFAULT_CSV_PATTERN, DEFAULT_DATA_DIR, DEFAULT_REPORT_PATH,
};
pub use validation::validate;
