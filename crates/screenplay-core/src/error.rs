//! Error types for the screenplay classifier and its collaborators.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ScreenplayError>;

/// Top-level error returned by the classifier and its surrounding shells.
#[derive(Debug, Error)]
pub enum ScreenplayError {
    /// Bad argument shape/size/type at a boundary (e.g. malformed input document,
    /// invalid PDF binary).
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Failure inside the PDF extraction collaborator.
    #[error("pdf error: {0}")]
    Pdf(#[from] PdfError),

    /// Unexpected failure inside the classifier itself. The classifier is total
    /// on well-formed input, so this should be rare.
    #[error("classification error: {reason}")]
    Classification { reason: String },
}

impl ScreenplayError {
    pub fn validation(message: impl Into<String>) -> Self {
        ScreenplayError::Validation { message: message.into() }
    }

    pub fn classification(reason: impl Into<String>) -> Self {
        ScreenplayError::Classification { reason: reason.into() }
    }
}

/// Errors produced by the PDF extraction collaborator.
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("failed to open PDF: {0}")]
    OpenFailed(String),

    #[error("failed to read page {page}: {reason}")]
    PageReadFailed { page: usize, reason: String },

    #[error("invalid PDF binary: {0}")]
    InvalidBinary(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
