use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrateError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Logo file not found: {}", .0.display())]
    LogoNotFound(PathBuf),

    #[error("Malformed input file {}: {reason}", .path.display())]
    MalformedInput { path: PathBuf, reason: String },

    #[error("Output {} would overwrite {}", .output.display(), .existing.display())]
    OutputCollision { output: PathBuf, existing: PathBuf },

    #[error("Report formatting error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, CrateError>;
