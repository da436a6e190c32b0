//! # Error Types
//!
//! This module defines error types used throughout the barcraft library.
//!
//! [`EncodeError`] covers everything that can go wrong between a payload and a
//! raster. [`BarcraftError`] is the crate-wide error used by the CLI, the HTTP
//! server and the PNG/logo helpers.

use thiserror::Error;

use crate::symbology::Symbology;

/// Failure to turn a payload into a symbol.
///
/// A failed encode is always reported; the renderer never falls back to a
/// best-effort image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Nothing to encode
    #[error("Content is empty")]
    EmptyContent,

    /// Wrong digit count for a fixed-length numeric symbology
    #[error("{symbology} requires {expected} or {} digits, got {found}", .expected - 1)]
    InvalidDigitCount {
        symbology: Symbology,
        expected: usize,
        found: usize,
    },

    /// The upstream generator produced no dark modules
    #[error("Generated symbol contains no dark modules")]
    EmptySymbol,

    /// Degenerate logo geometry
    #[error("Unsupported logo aspect ratio ({width}x{height})")]
    UnsupportedAspectRatio { width: u32, height: u32 },

    /// Output too small to give every module or bar a whole pixel
    #[error("Output of {got}px is too small, need at least {required}px")]
    OutputTooSmall { required: u32, got: u32 },

    /// The upstream generator rejected the payload
    #[error("{symbology} generator failed: {reason}")]
    Generator {
        symbology: Symbology,
        reason: String,
    },
}

/// Main error type for barcraft operations
#[derive(Debug, Error)]
pub enum BarcraftError {
    /// Encoding or rendering error
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Image decoding/encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// Invalid configuration value
    #[error("Config error: {0}")]
    Config(String),

    /// HTTP server error (bind, serve)
    #[error("Server error: {0}")]
    Server(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_digit_count_message() {
        let err = EncodeError::InvalidDigitCount {
            symbology: Symbology::Ean13,
            expected: 13,
            found: 11,
        };
        assert_eq!(err.to_string(), "EAN-13 requires 13 or 12 digits, got 11");
    }

    #[test]
    fn test_output_too_small_message() {
        let err = EncodeError::OutputTooSmall {
            required: 115,
            got: 80,
        };
        assert_eq!(err.to_string(), "Output of 80px is too small, need at least 115px");
    }

    #[test]
    fn test_encode_error_converts() {
        let err: BarcraftError = EncodeError::EmptySymbol.into();
        assert!(matches!(err, BarcraftError::Encode(EncodeError::EmptySymbol)));
        assert_eq!(err.to_string(), "Generated symbol contains no dark modules");
    }
}
