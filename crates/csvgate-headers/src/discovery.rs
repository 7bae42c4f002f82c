/*!
# File Discovery

Turns a [`FileSource`] into the sorted list of paths the validator walks. The
actual listing goes through a [`PathLister`] so tests can supply paths without a
filesystem.
*/

use crate::{
    errors::{CsvError, CsvResult},
    schemas::{EmptyFileSetPolicy, DEFAULT_CSV_PATTERN, DEFAULT_DATA_DIR},
};
use glob::MatchOptions;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where the CSV files come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// Explicit glob pattern, e.g. `exports/2024-*.csv`
    Glob(String),
    /// Every `*.csv` directly inside a directory
    DataDir(PathBuf),
}

impl Default for FileSource {
    fn default() -> Self {
        FileSource::DataDir(PathBuf::from(DEFAULT_DATA_DIR))
    }
}

impl FileSource {
    pub fn pattern(&self) -> String {
        match self {
            FileSource::Glob(pattern) => pattern.clone(),
            FileSource::DataDir(dir) => {
                let dir = glob::Pattern::escape(&dir.to_string_lossy());
                Path::new(&dir)
                    .join(DEFAULT_CSV_PATTERN)
                    .to_string_lossy()
                    .into_owned()
            }
        }
    }

    /// Empty-set behavior when the caller did not choose one: auto-discovery
    /// fails, an explicit glob passes vacuously.
    pub fn default_empty_policy(&self) -> EmptyFileSetPolicy {
        match self {
            FileSource::Glob(_) => EmptyFileSetPolicy::Pass,
            FileSource::DataDir(_) => EmptyFileSetPolicy::Fail,
        }
    }
}

impl fmt::Display for FileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileSource::Glob(pattern) => write!(f, "glob '{}'", pattern),
            FileSource::DataDir(dir) => write!(f, "directory '{}'", dir.display()),
        }
    }
}

/// Capability that expands a glob pattern into paths
pub trait PathLister {
    fn list(&self, pattern: &str) -> CsvResult<Vec<PathBuf>>;
}

impl<F> PathLister for F
where
    F: Fn(&str) -> CsvResult<Vec<PathBuf>>,
{
    fn list(&self, pattern: &str) -> CsvResult<Vec<PathBuf>> {
        self(pattern)
    }
}

/// Filesystem lister backed by the `glob` crate.
///
/// Only regular files are returned, and wildcards never match a leading `.`, so
/// hidden files are left out unless the pattern names the dot itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobPathLister;

impl PathLister for GlobPathLister {
    fn list(&self, pattern: &str) -> CsvResult<Vec<PathBuf>> {
        let options = MatchOptions {
            require_literal_leading_dot: true,
            ..MatchOptions::new()
        };
        let entries = glob::glob_with(pattern, options).map_err(|source| CsvError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?;
            if path.is_file() {
                paths.push(path);
            } else {
                debug!(path = %path.display(), "skipping non-file match");
            }
        }
        Ok(paths)
    }
}

/// List the files for `source`, sorted by raw path bytes, applying `policy` to
/// an empty result.
pub fn discover<L: PathLister>(
    lister: &L,
    source: &FileSource,
    policy: EmptyFileSetPolicy,
) -> CsvResult<Vec<PathBuf>> {
    let pattern = source.pattern();
    let mut paths = lister.list(&pattern)?;
    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    paths.dedup();

    info!(%pattern, count = paths.len(), "discovered CSV files");

    if paths.is_empty() && policy == EmptyFileSetPolicy::Fail {
        return Err(CsvError::NoFilesFound(pattern));
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixed(paths: &'static [&'static str]) -> impl Fn(&str) -> CsvResult<Vec<PathBuf>> {
        move |_: &str| Ok(paths.iter().map(PathBuf::from).collect())
    }

    #[test]
    fn test_data_dir_pattern() {
        let source = FileSource::default();
        assert_eq!(source.pattern(), "data/*.csv");
        assert_eq!(source.default_empty_policy(), EmptyFileSetPolicy::Fail);
    }

    #[test]
    fn test_data_dir_pattern_escapes_metacharacters() {
        let source = FileSource::DataDir(PathBuf::from("in[1]"));
        assert_eq!(source.pattern(), "in[[]1[]]/*.csv");
    }

    #[test]
    fn test_explicit_glob_defaults_to_passing_on_empty() {
        let source = FileSource::Glob("x/*.csv".to_string());
        assert_eq!(source.pattern(), "x/*.csv");
        assert_eq!(source.default_empty_policy(), EmptyFileSetPolicy::Pass);
    }

    #[test]
    fn test_discover_sorts_lexicographically() {
        let lister = fixed(&["data/b.csv", "data/a-2.csv", "data/a.csv", "data/B.csv"]);
        let paths = discover(&lister, &FileSource::default(), EmptyFileSetPolicy::Fail).unwrap();

        assert_eq!(
            paths,
            vec![
                PathBuf::from("data/B.csv"),
                PathBuf::from("data/a-2.csv"),
                PathBuf::from("data/a.csv"),
                PathBuf::from("data/b.csv"),
            ]
        );
    }

    #[test]
    fn test_empty_discovery_respects_policy() {
        let lister = fixed(&[]);
        let source = FileSource::default();

        let err = discover(&lister, &source, EmptyFileSetPolicy::Fail).unwrap_err();
        assert!(matches!(err, CsvError::NoFilesFound(ref p) if p == "data/*.csv"));

        let paths = discover(&lister, &source, EmptyFileSetPolicy::Pass).unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn test_glob_lister_returns_only_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.csv"), "id\n").unwrap();
        fs::write(dir.path().join("a.csv"), "id\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "hello").unwrap();
        fs::create_dir(dir.path().join("nested.csv")).unwrap();

        let source = FileSource::DataDir(dir.path().to_path_buf());
        let paths = discover(&GlobPathLister, &source, EmptyFileSetPolicy::Fail).unwrap();

        assert_eq!(paths, vec![dir.path().join("a.csv"), dir.path().join("b.csv")]);
    }

    #[test]
    fn test_glob_lister_skips_hidden_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".old.csv"), "legacy\n").unwrap();
        fs::write(dir.path().join("a.csv"), "id\n").unwrap();

        let source = FileSource::DataDir(dir.path().to_path_buf());
        let paths = discover(&GlobPathLister, &source, EmptyFileSetPolicy::Fail).unwrap();
        assert_eq!(paths, vec![dir.path().join("a.csv")]);

        let explicit = format!("{}/.*.csv", dir.path().display());
        let hidden = GlobPathLister.list(&explicit).unwrap();
        assert_eq!(hidden, vec![dir.path().join(".old.csv")]);
    }

    #[test]
    fn test_invalid_pattern_is_a_configuration_error() {
        let err = GlobPathLister.list("data/[*.csv").unwrap_err();
        assert!(matches!(err, CsvError::InvalidPattern { .. }));
        assert!(err.is_configuration());
    }
}
