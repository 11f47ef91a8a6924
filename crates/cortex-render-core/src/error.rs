//! Error types for renderer operations.

use thiserror::Error;

/// Core error type for renderer operations.
#[derive(Error, Debug)]
pub enum Error {
    /// An I/O error occurred while writing to the transport.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal operation failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Feature not supported by the surface.
    #[error("Unsupported feature: {0}")]
    Unsupported(String),
}

/// Result type alias using the core Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for color parsing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input string was empty.
    #[error("empty input")]
    EmptyInput,

    /// Hex string had an invalid length.
    #[error("invalid hex length: {0} (expected 3 or 6)")]
    InvalidLength(usize),

    /// Invalid hexadecimal character.
    #[error("invalid hex character")]
    InvalidHexChar,

    /// Palette index outside of the palette.
    #[error("palette index out of range: {0}")]
    IndexOutOfRange(String),

    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownColor(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Terminal("raw mode".to_string());
        assert_eq!(err.to_string(), "Terminal error: raw mode");

        let err = ColorParseError::InvalidLength(5);
        assert_eq!(err.to_string(), "invalid hex length: 5 (expected 3 or 6)");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
