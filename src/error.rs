use std::path::PathBuf;
use thiserror::Error;

/// Failures that end a conversion
///
/// Value inference never fails, so every variant comes from either the
/// record source or the output sink.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input file does not exist
    #[error("input file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// The tabular reader failed to open or read a record
    #[error("failed to read input: {0}")]
    Source(#[from] csv::Error),

    /// The output sink rejected a write or flush
    #[error("failed to write output: {0}")]
    SinkWrite(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
