use std::path::PathBuf;

/// Unified error type for the platform-utils crate.
#[derive(Debug, thiserror::Error)]
pub enum UtilsError {
    /// Functionality not provided by this adapter.
    #[error("not implemented")]
    NotImplemented,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("illegal state: {0}")]
    IllegalState(String),

    #[error("function not implemented for this platform: {0}")]
    UnsupportedPlatform(String),

    #[error("unsupported location: {0}")]
    UnsupportedLocation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias using [`UtilsError`].
pub type UtilsResult<T> = Result<T, UtilsError>;
