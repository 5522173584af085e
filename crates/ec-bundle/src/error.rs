//! Error types for bundle operations.

use thiserror::Error;

/// Errors that can occur while opening or assembling a bundle.
#[derive(Error, Debug)]
pub enum BundleError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A recognised member could not be read to the end
    #[error("failed to read bundle member '{member}': {source}")]
    MemberRead {
        member: String,
        #[source]
        source: std::io::Error,
    },

    /// Bundle is empty
    #[error("bundle has no content to write")]
    EmptyBundle,
}

/// Result type alias for bundle operations.
pub type Result<T> = std::result::Result<T, BundleError>;
