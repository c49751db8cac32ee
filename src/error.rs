//! Error types for bresenham-line operations.
//!
//! Rasterization itself cannot fail; these cover the surfaces around it
//! (framebuffers, encoders, configuration).

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bresenham-line operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Point parsing error (expected `X,Y`).
    #[error("Invalid point: {0}")]
    InvalidPoint(String),

    /// Configuration value out of range.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Configuration file not found or unreadable.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// Configuration file could not be parsed.
    #[error("Config parse error at line {line}: {message}")]
    ConfigParse {
        /// Line number of the error (0 if unknown).
        line: usize,
        /// Parser message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions { width: 0, height: 100 };
        assert!(err.to_string().contains("Invalid dimensions"));
        assert!(err.to_string().contains("0x100"));
    }

    #[test]
    fn test_io_error_conversion() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_config_error_display() {
        let err = Error::Config("padding leaves no drawable area".to_string());
        assert!(err.to_string().starts_with("Invalid configuration"));
    }
}
