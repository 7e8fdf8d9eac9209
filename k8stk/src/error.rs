//! Error types for the k8stk library.
//!
//! This module provides the error hierarchy for loading, merging, editing and
//! serializing kubeconfig documents, using `thiserror` for ergonomic error
//! handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a k8stk error.
///
/// # Examples
///
/// ```
/// use k8stk::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(2)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the k8stk library.
///
/// Every variant is fatal for the command that produced it; nothing here is
/// retried. Collision renaming during merge is not an error path.
#[derive(Debug, Error)]
pub enum Error {
    /// A document file could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A document file could not be parsed into the kubeconfig model.
    #[error("failed to parse {}: {source}", path.display())]
    Format {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying parser error.
        #[source]
        source: serde_yaml::Error,
    },

    /// In-memory document text could not be parsed.
    #[error("failed to parse document: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// In-memory document text was empty.
    #[error("document is empty")]
    EmptyDocument,

    /// A document file was empty.
    #[error("document {} is empty", path.display())]
    EmptyFile {
        /// The empty file.
        path: PathBuf,
    },

    /// A document could not be serialized.
    #[error("failed to serialize document as {format}: {reason}")]
    Serialization {
        /// The requested output format.
        format: String,
        /// A description of the failure.
        reason: String,
    },

    /// The named context does not exist in the document.
    #[error("context '{name}' not found")]
    ContextNotFound {
        /// The context that was requested.
        name: String,
    },

    /// Removing the context would leave no context to make current.
    #[error("removing context '{name}' would leave no context to use as current-context")]
    EmptyResult {
        /// The context whose removal was refused.
        name: String,
    },

    /// A document invariant does not hold.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error indicates that a requested context does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use k8stk::Error;
    ///
    /// let err = Error::ContextNotFound { name: "dev".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ContextNotFound { .. })
    }

    /// Check if error came from reading or parsing a document.
    #[must_use]
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::Format { .. } | Self::Parse(_) | Self::EmptyDocument | Self::EmptyFile { .. }
        )
    }
}
