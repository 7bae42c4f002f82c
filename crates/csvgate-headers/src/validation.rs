/*!
# Header Validation

Walks an already-sorted list of files, reads each header through a
[`HeaderReader`], and folds the findings into one immutable [`Summary`].

The first file's header becomes the reference; every later header is compared
against it element by element. Both flags only ever move from `false` to `true`.
*/

use crate::{
    errors::CsvResult,
    reader::HeaderReader,
    schemas::{FileRecord, Header, RequiredColumns, Summary},
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

// ================================================================================================
// Fold State
// ================================================================================================

#[derive(Debug, Default)]
struct Accumulator {
    reference_header: Option<Header>,
    per_file: Vec<FileRecord>,
    missing_columns_detected: bool,
    inconsistent_headers_detected: bool,
}

impl Accumulator {
    fn push(mut self, path: &Path, header: Header, required: &RequiredColumns) -> Self {
        let reference = self.reference_header.get_or_insert_with(|| header.clone());
        let consistent = *reference == header;

        if !consistent {
            debug!(
                file = %path.display(),
                expected = ?reference.as_slice(),
                found = ?header.as_slice(),
                "header differs from reference"
            );
        }

        let record = FileRecord::new(path.to_path_buf(), header, required);
        if record.has_missing() {
            info!(
                file = %path.display(),
                missing = ?record.missing_required_columns,
                "required columns missing"
            );
        }

        self.missing_columns_detected |= record.has_missing();
        self.inconsistent_headers_detected |= !consistent;
        self.per_file.push(record);
        self
    }

    fn finish(self, checked_files: Vec<PathBuf>, required: RequiredColumns) -> Summary {
        Summary {
            checked_files,
            required_columns: required,
            per_file: self.per_file,
            missing_columns_detected: self.missing_columns_detected,
            inconsistent_headers_detected: self.inconsistent_headers_detected,
            reference_header: self.reference_header,
        }
    }
}

// ================================================================================================
// Validation
// ================================================================================================

/// Validate `paths` (expected in ascending path order) against `required`.
///
/// Performs no I/O beyond calling `reader`. The first read error aborts the whole
/// run and is returned unchanged.
pub fn validate<R>(paths: &[PathBuf], required: &RequiredColumns, reader: &R) -> CsvResult<Summary>
where
    R: HeaderReader + ?Sized,
{
    let acc = paths
        .iter()
        .try_fold(Accumulator::default(), |acc, path| -> CsvResult<Accumulator> {
            let header = reader.read_header(path)?;
            Ok(acc.push(path, header, required))
        })?;

    Ok(acc.finish(paths.to_vec(), required.clone()))
}

// ================================================================================================
// Tests
// ================================================================================================
