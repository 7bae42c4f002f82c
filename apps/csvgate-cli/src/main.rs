use clap::{error::ErrorKind, CommandFactory, Parser};
use csvgate_headers::DEFAULT_REPORT_PATH;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;

use config::{OnEmpty, RunConfig};
use error::CliResult;

#[derive(Parser, Debug)]
#[command(name = "csvgate")]
#[command(about = "CSV header gate - checks required columns and header consistency")]
#[command(version)]
pub(crate) struct Cli {
    /// Glob for CSV files, e.g. "data/*.csv" (default: every *.csv in --data-dir)
    #[arg(long, env = "CSVGATE_CSV_GLOB", value_name = "PATTERN")]
    csv_glob: Option<String>,

    /// Directory scanned for *.csv when no --csv-glob is given [default: data]
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Comma-separated required columns
    #[arg(long, env = "CSVGATE_REQUIRED_COLS", value_name = "COLS")]
    required_cols: String,

    /// JSON report path
    #[arg(long, env = "CSVGATE_OUT", default_value = DEFAULT_REPORT_PATH)]
    out: PathBuf,

    /// What to do when no CSV files are found [default: fail for --data-dir, pass for --csv-glob]
    #[arg(long, value_enum)]
    on_empty: Option<OnEmpty>,

    /// Treat header inconsistency across files as a failure
    #[arg(long)]
    strict_headers: bool,

    /// Field delimiter (single ASCII character, or \t)
    #[arg(long, default_value = ",")]
    delimiter: String,

    /// Skip per-file result lines
    #[arg(short, long)]
    quiet: bool,
}

fn run(cli: &Cli) -> CliResult<u8> {
    let config = RunConfig::try_from(cli)?;
    let verdict = commands::validate::execute(&config)?;
    Ok(verdict.exit_code())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) if e.is_configuration() => Cli::command().error(ErrorKind::ValueValidation, e).exit(),
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
