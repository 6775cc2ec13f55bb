//! Error types for tategaki library.

use std::io;
use thiserror::Error;

/// Result type alias for tategaki operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during layout, rendering and export.
#[derive(Error, Debug)]
pub enum Error {
    /// The input text was empty.
    #[error("Content cannot be empty")]
    EmptyContent,

    /// Layout parameters are out of range.
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),

    /// A single page could not be exported.
    #[error("Failed to export page {page}: {message}")]
    Export {
        /// 1-indexed page number
        page: u32,
        /// Underlying failure
        message: String,
    },

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error during rendering (SVG, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Invalid page range specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),
}

impl Error {
    /// Wrap any displayable failure as an export error for `page`.
    pub fn export(page: u32, err: impl std::fmt::Display) -> Self {
        Error::Export {
            page,
            message: err.to_string(),
        }
    }

    /// Whether this error was raised while validating input or configuration.
    pub fn is_layout_error(&self) -> bool {
        matches!(self, Error::EmptyContent | Error::InvalidConfig(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyContent;
        assert_eq!(err.to_string(), "Content cannot be empty");

        let err = Error::PageOutOfRange(10, 5);
        assert_eq!(
            err.to_string(),
            "Page 10 is out of range (document has 5 pages)"
        );

        let err = Error::export(3, "disk full");
        assert_eq!(err.to_string(), "Failed to export page 3: disk full");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_layout_error());
    }

    #[test]
    fn test_layout_error_classification() {
        assert!(Error::EmptyContent.is_layout_error());
        assert!(Error::InvalidConfig("zero".into()).is_layout_error());
        assert!(!Error::Render("x".into()).is_layout_error());
    }
}
