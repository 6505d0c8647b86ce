// ============================================================================
// File: src/error.rs
// ----------------------------------------------------------------------------
// Error types for storage resolution, environment loading and fetch outcomes
// ============================================================================

use std::io;
use std::path::PathBuf;

/// Storage operation errors
///
/// Internal classification of filesystem failures met while resolving a
/// cache directory. The resolver turns these into a fallback and a log line;
/// they never reach callers of the public resolution operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A cache directory could not be created
    #[error("Unable to create directory {}: {source}", .path.display())]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The no-index marker file could not be created
    #[error("Can't create marker file {}: {source}", .path.display())]
    MarkerCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    /// Path the failed operation targeted
    pub fn path(&self) -> &PathBuf {
        match self {
            StorageError::DirectoryCreateFailed { path, .. } => path,
            StorageError::MarkerCreateFailed { path, .. } => path,
        }
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised while loading environment or locator configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config contents are not valid JSON for the expected shape
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Failure cause handed to a response listener
///
/// Produced by the fetch pipeline driving a request. The listener contract
/// forwards it untouched together with the request code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Transport-level failure (connection refused, DNS, reset)
    #[error("Network operation failed: {details}")]
    Network { details: String },

    /// No response within the allotted time
    #[error("Request timed out after {seconds} seconds")]
    Timeout { seconds: u64 },

    /// Server answered with an error status
    #[error("Server responded with status {status}")]
    Server { status: u16 },

    /// Response body could not be parsed
    #[error("Failed to parse response: {details}")]
    Parse { details: String },

    /// Request was abandoned before an outcome was produced
    #[error("Request was cancelled before completion")]
    Cancelled,
}

impl FetchError {
    pub fn network<D: Into<String>>(details: D) -> Self {
        FetchError::Network {
            details: details.into(),
        }
    }

    pub fn parse<D: Into<String>>(details: D) -> Self {
        FetchError::Parse {
            details: details.into(),
        }
    }
}
