use std::path::PathBuf;
use thiserror::Error;

/// The main error type for pointdist operations.
#[derive(Debug, Error)]
pub enum PointdistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read input directory {path}: {message}")]
    InputDirUnreadable { path: PathBuf, message: String },

    #[error("Input file does not exist or cannot be read: {path}: {source}")]
    InputFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open output file {path}: {source}")]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write distance record to {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize run report: {0}")]
    ReportSerialize(#[from] serde_json::Error),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
