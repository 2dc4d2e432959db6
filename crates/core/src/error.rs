//! Error types for the font header pipeline.

use std::path::PathBuf;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a header generation run.
///
/// There is no retry or fallback anywhere in the pipeline; every variant
/// propagates straight to the caller and fails the whole run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A font download could not complete.
    #[error("Failed to fetch {url}: {message}")]
    Network { url: String, message: String },

    /// The conversion tool exited unsuccessfully or could not be run.
    #[error("Conversion failed for '{path}' at {size}pt: {message}")]
    Conversion {
        path: PathBuf,
        size: u32,
        message: String,
    },

    /// Filesystem error while managing the cache or the output artifact.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
