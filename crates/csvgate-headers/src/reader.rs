/*!
# Header Reading

The validator never touches the filesystem itself; it asks a [`HeaderReader`] for
each file's first row. [`CsvHeaderReader`] is the real implementation, and any
`Fn(&Path) -> CsvResult<Header>` closure works as an in-memory stand-in.
*/

use crate::{
    errors::{CsvError, CsvResult},
    schemas::Header,
};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Read};
use std::path::Path;
use tracing::debug;

const UTF8_BOM: char = '\u{feff}';
const UTF8_BOM_BYTES: &[u8] = b"\xef\xbb\xbf";

/// Capability that yields the first row of a file
pub trait HeaderReader {
    fn read_header(&self, path: &Path) -> CsvResult<Header>;
}

impl<F> HeaderReader for F
where
    F: Fn(&Path) -> CsvResult<Header>,
{
    fn read_header(&self, path: &Path) -> CsvResult<Header> {
        self(path)
    }
}

/// Reads only the first record of a CSV file with RFC 4180 quoting rules
#[derive(Debug, Clone, Copy)]
pub struct CsvHeaderReader {
    delimiter: u8,
}

impl Default for CsvHeaderReader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvHeaderReader {
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

impl HeaderReader for CsvHeaderReader {
    fn read_header(&self, path: &Path) -> CsvResult<Header> {
        let file_read = |source: csv::Error| CsvError::FileRead {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(|e| file_read(e.into()))?;
        let mut input = BufReader::new(file);

        // The csv reader skips blank lines, but a blank first line is still the
        // file's first row and yields an empty header.
        let mut first_line = Vec::new();
        input
            .read_until(b'\n', &mut first_line)
            .map_err(|e| file_read(e.into()))?;
        if is_blank_line(&first_line) {
            debug!(path = %path.display(), "first row is empty");
            return Ok(Header::empty());
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(Cursor::new(first_line).chain(input));

        let mut record = StringRecord::new();
        if !rdr.read_record(&mut record).map_err(file_read)? {
            debug!(path = %path.display(), "file has no rows");
            return Ok(Header::empty());
        }

        let cells: Vec<String> = record
            .iter()
            .enumerate()
            .map(|(i, cell)| match i {
                0 => cell.trim_start_matches(UTF8_BOM).to_string(),
                _ => cell.to_string(),
            })
            .collect();

        debug!(path = %path.display(), columns = cells.len(), "read header");
        Ok(Header::from(cells))
    }
}

fn is_blank_line(line: &[u8]) -> bool {
    let line = line.strip_prefix(UTF8_BOM_BYTES).unwrap_or(line);
    matches!(line, b"" | b"\n" | b"\r\n")
}

/// Parse a delimiter argument: one ASCII character, or `\t` for tab.
pub fn parse_delimiter(input: &str) -> CsvResult<u8> {
    if input == "\\t" {
        return Ok(b'\t');
    }

    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(CsvError::InvalidDelimiter(input.to_string())),
    }
}
