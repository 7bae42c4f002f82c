use csvgate_headers::CsvError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Csv(#[from] CsvError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CliError {
    pub fn is_configuration(&self) -> bool {
        match self {
            CliError::Csv(e) => e.is_configuration(),
            CliError::InvalidConfig(_) => true,
        }
    }

    /// Usage problems exit 2 like clap's own errors; everything else exits 1.
    pub fn exit_code(&self) -> u8 {
        if self.is_configuration() {
            2
        } else {
            1
        }
    }
}
