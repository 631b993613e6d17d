#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LongcareError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON dataset {path}: {message}")]
    Json { path: PathBuf, message: String },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("unsupported dataset format: {path} (expected .json or .csv)")]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid dataset {path}: {message}")]
    InvalidDataset { path: PathBuf, message: String },
}

impl LongcareError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LongcareError>;
