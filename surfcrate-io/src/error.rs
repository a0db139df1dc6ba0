//! Error types for I/O operations

use thiserror::Error;

/// Errors that can occur while loading or writing surface data
#[derive(Error, Debug)]
pub enum IoError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid samples in {path}: {message}")]
    InvalidSamples { path: String, message: String },

    #[error("Write error: {message}")]
    WriteError { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    fn path(&self) -> Option<&str> {
        match self {
            IoError::FileNotFound { path }
            | IoError::ParseError { path, .. }
            | IoError::InvalidSamples { path, .. } => Some(path),
            _ => None,
        }
    }
}

impl From<IoError> for surfcrate_core::Error {
    fn from(err: IoError) -> Self {
        surfcrate_core::Error::DataLoad {
            path: err.path().unwrap_or("<unknown>").to_string(),
            message: err.to_string(),
        }
    }
}
