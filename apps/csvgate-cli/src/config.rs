use crate::{
    error::{CliError, CliResult},
    Cli,
};
use clap::ValueEnum;
use csvgate_headers::{parse_delimiter, EmptyFileSetPolicy, FileSource, RequiredColumns};
use std::path::PathBuf;

/// `--on-empty` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OnEmpty {
    /// Exit 1 without writing a report
    Fail,
    /// Write a vacuous passing report
    Pass,
}

impl From<OnEmpty> for EmptyFileSetPolicy {
    fn from(value: OnEmpty) -> Self {
        match value {
            OnEmpty::Fail => EmptyFileSetPolicy::Fail,
            OnEmpty::Pass => EmptyFileSetPolicy::Pass,
        }
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Where the CSV files come from
    pub source: FileSource,

    /// Columns every file must carry
    pub required: RequiredColumns,

    /// JSON summary destination
    pub report_path: PathBuf,

    /// Behavior when discovery matches nothing
    pub empty_policy: EmptyFileSetPolicy,

    /// Fail (exit 1) on header inconsistency instead of warning
    pub strict_headers: bool,

    pub delimiter: u8,

    /// Skip per-file console lines
    pub quiet: bool,
}

impl TryFrom<&Cli> for RunConfig {
    type Error = CliError;

    fn try_from(cli: &Cli) -> CliResult<Self> {
        let source = match (&cli.csv_glob, &cli.data_dir) {
            (Some(_), Some(_)) => {
                return Err(CliError::InvalidConfig(
                    "--csv-glob and --data-dir cannot be used together".to_string(),
                ))
            }
            (Some(pattern), None) => FileSource::Glob(pattern.clone()),
            (None, Some(dir)) => FileSource::DataDir(dir.clone()),
            (None, None) => FileSource::default(),
        };

        let empty_policy = cli
            .on_empty
            .map(EmptyFileSetPolicy::from)
            .unwrap_or_else(|| source.default_empty_policy());

        Ok(Self {
            required: RequiredColumns::parse(&cli.required_cols)?,
            report_path: cli.out.clone(),
            empty_policy,
            strict_headers: cli.strict_headers,
            delimiter: parse_delimiter(&cli.delimiter)?,
            quiet: cli.quiet,
            source,
        })
    }
}
