//! Error types for petalset.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for loading and viewing a flower dataset.
#[derive(Error, Debug)]
pub enum Error {
    /// A file or directory could not be read.
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contents are not a decodable image.
    #[error("Failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Encoding a rendered image failed.
    #[error("Failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("Unknown category: {0:?}")]
    UnknownCategory(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Sampling was requested from a dataset with no samples.
    #[error("Dataset is empty; nothing to sample")]
    EmptyDataset,

    #[error("Sample index {index} is out of range for a dataset of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Raised by callers that treat any per-file failure as fatal.
    #[error("{count} file(s) failed to load")]
    LoadFailures { count: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
