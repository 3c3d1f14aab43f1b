//! Error types for the docstruct library.

use std::io;
use thiserror::Error;

/// Result type alias for docstruct operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur at the composition boundary.
///
/// The structuring core (normalization, heading classification, section
/// assembly) is total and never returns these; errors arise only from
/// I/O, rendering, and external collaborators.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error during rendering (JSON, text, Markdown).
    #[error("Rendering error: {0}")]
    Render(String),

    /// An external collaborator (table detection, OCR) failed.
    #[error("Collaborator '{source_name}' failed: {reason}")]
    Collaborator {
        /// Name of the failing source
        source_name: String,
        /// Failure description as reported by the source
        reason: String,
    },

    /// The input could not be interpreted as a page sequence.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a collaborator failure error.
    pub fn collaborator(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Collaborator {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}
