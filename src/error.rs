//! Error types for undocx library.

use std::io;
use thiserror::Error;

/// Result type alias for undocx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during DOCX processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a ZIP package or not a word-processing document.
    #[error("Unknown file format: not a valid DOCX package")]
    UnknownFormat,

    /// The document package could not be loaded (corrupt archive, malformed XML).
    #[error("Document load error: {0}")]
    DocumentLoad(String),

    /// A required package part is missing.
    #[error("Missing package part: {0}")]
    MissingPart(String),

    /// Tables are nested deeper than the configured limit.
    #[error("Table nesting depth {depth} exceeds limit of {limit}")]
    NestingTooDeep { depth: usize, limit: usize },

    /// Error during HTML rendering.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Whether this error happened while loading the document (as opposed to rendering it).
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Error::Io(_)
                | Error::UnknownFormat
                | Error::DocumentLoad(_)
                | Error::MissingPart(_)
                | Error::NestingTooDeep { .. }
        )
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            zip::result::ZipError::FileNotFound => Error::MissingPart(err.to_string()),
            _ => Error::DocumentLoad(format!("invalid ZIP archive: {}", err)),
        }
    }
}

impl From<roxmltree::Error> for Error {
    fn from(err: roxmltree::Error) -> Self {
        Error::DocumentLoad(format!("malformed XML: {}", err))
    }
}
