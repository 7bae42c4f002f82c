use crate::{config::RunConfig, error::CliResult};
use csvgate_headers::{
    discover, validate, write_summary_report, CsvHeaderReader, CsvResult, FileRecord,
    GlobPathLister, Header, HeaderReader, Summary, Verdict,
};
use std::path::Path;
use tracing::debug;

/// Announces each file on the console before reading its header
struct ProgressReader<R> {
    inner: R,
    quiet: bool,
}

impl<R: HeaderReader> HeaderReader for ProgressReader<R> {
    fn read_header(&self, path: &Path) -> CsvResult<Header> {
        if !self.quiet {
            println!("🔍 Checking {}", path.display());
        }
        self.inner.read_header(path)
    }
}

/// Discover, validate, write the report, then report the verdict.
///
/// The report is always written before the verdict is returned, so a failing
/// run still leaves its summary behind. Discovery and read failures abort before
/// anything is written.
pub fn execute(config: &RunConfig) -> CliResult<Verdict> {
    println!("📂 Validating CSV headers from {}", config.source);
    println!(
        "📋 Required columns: {}",
        config.required.as_slice().join(", ")
    );

    let files = discover(&GlobPathLister, &config.source, config.empty_policy)?;
    println!("Found {} CSV file(s)", files.len());

    let reader = ProgressReader {
        inner: CsvHeaderReader::with_delimiter(config.delimiter),
        quiet: config.quiet,
    };
    let summary = validate(&files, &config.required, &reader)?;

    if !config.quiet {
        for record in &summary.per_file {
            print_file_result(record);
        }
        print_inconsistent_files(&summary);
    }

    write_summary_report(&config.report_path, &summary)?;

    let verdict = summary.verdict(config.strict_headers);
    debug!(?verdict, strict_headers = config.strict_headers, "verdict");
    print_verdict(&summary, verdict);

    println!("📄 Report written to {}", config.report_path.display());
    Ok(verdict)
}

fn print_file_result(record: &FileRecord) {
    if record.has_missing() {
        println!(
            "⚠️  {}: missing {} required column(s): {}",
            record.file.display(),
            record.missing_count,
            record.missing_required_columns.join(", ")
        );
    } else {
        println!(
            "✅ {}: all required columns present",
            record.file.display()
        );
    }
}

fn print_inconsistent_files(summary: &Summary) {
    for record in summary.inconsistent_files() {
        println!(
            "   header differs from reference: {}",
            record.file.display()
        );
    }
}

fn print_verdict(summary: &Summary, verdict: Verdict) {
    match verdict {
        Verdict::Fail if summary.missing_columns_detected => {
            println!("❌ ERROR: Missing required columns detected. See JSON summary.");
        }
        Verdict::Fail => {
            println!("❌ ERROR: Inconsistent headers across files (--strict-headers).");
        }
        Verdict::PassWithWarnings => {
            println!("⚠️  WARNING: Inconsistent headers across files (build will still pass).");
        }
        Verdict::Pass => {
            println!("✅ All checks passed");
        }
    }
}
