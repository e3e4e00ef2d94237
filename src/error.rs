//! Unified error types for sbom-vocab.
//!
//! Normalization itself never fails; an identifier without a mapping is
//! reported as the `Unknown` member of the target enum. The errors here cover
//! the surrounding work: reading input, loading configuration, and rendering
//! reports.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigFileError;
use crate::reports::ReportError;

/// Main error type for sbom-vocab operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum VocabError {
    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Configuration file could not be loaded
    #[error(transparent)]
    ConfigFile(#[from] ConfigFileError),

    /// Errors during report generation
    #[error("Report generation failed: {0}")]
    Report(#[from] ReportError),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for sbom-vocab operations
pub type Result<T> = std::result::Result<T, VocabError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl VocabError {
    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create an IO error for standard streams
    pub fn stdio(source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: None,
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Context extension trait
// ============================================================================

/// Extension trait for attaching path context to IO results
pub trait ErrorContext<T> {
    /// Attach the path the IO operation was working on
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorContext<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| VocabError::io(path, e))
    }
}
