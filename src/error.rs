//! Error types for photo-tidy

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the organizing and renaming pipelines
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read EXIF data from {path}: {message}")]
    ExifRead { path: PathBuf, message: String },

    #[error("Directory listing error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Invalid file name: {0}")]
    InvalidFilename(PathBuf),

    #[error("No free name available for {0}")]
    NameExhausted(PathBuf),
}
