use crate::{
    errors::{CsvError, CsvResult},
    schemas::Summary,
};
use std::fs;
use std::path::Path;
use tracing::info;

/// Pretty JSON (two-space indent, non-ASCII kept literal) with a trailing newline
pub fn render_summary_json(summary: &Summary) -> CsvResult<String> {
    let mut json = serde_json::to_string_pretty(summary)?;
    json.push('\n');
    Ok(json)
}

/// Write the summary to `path`, creating parent directories as needed.
pub fn write_summary_report<P: AsRef<Path>>(path: P, summary: &Summary) -> CsvResult<()> {
    let path = path.as_ref();
    let report_write = |source| CsvError::ReportWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(report_write)?;
    }

    let json = render_summary_json(summary)?;
    fs::write(path, json).map_err(report_write)?;

    info!(path = %path.display(), files = summary.per_file.len(), "wrote summary report");
    Ok(())
}
