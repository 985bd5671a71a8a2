//! Error types for the packing core.

use thiserror::Error;

/// Result type for packing operations.
pub type PackResult<T> = Result<T, PackError>;

/// Errors that can occur while converting audio to r8/r1.
#[derive(Debug, Error)]
pub enum PackError {
    /// Unreadable or unsupported container contents.
    #[error("decode error: {reason}")]
    Decode {
        /// What was wrong with the input.
        reason: String,
    },

    /// No decoder is available for the input format.
    #[error("no decoder available for '{ext}'")]
    UnsupportedFormat {
        /// The offending file extension (or a description of the input).
        ext: String,
    },

    /// Invalid conversion request or pipeline failure.
    #[error("conversion error: {reason}")]
    Conversion {
        /// Error message.
        reason: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PackError {
    /// Creates a decode error.
    pub fn decode(reason: impl Into<String>) -> Self {
        Self::Decode {
            reason: reason.into(),
        }
    }

    /// Creates an unsupported-format error.
    pub fn unsupported(ext: impl Into<String>) -> Self {
        Self::UnsupportedFormat { ext: ext.into() }
    }

    /// Creates a conversion error.
    pub fn conversion(reason: impl Into<String>) -> Self {
        Self::Conversion {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_helper() {
        let err = PackError::decode("bad RIFF signature");
        assert!(err.to_string().contains("bad RIFF signature"));
    }

    #[test]
    fn test_unsupported_helper() {
        let err = PackError::unsupported("mp3");
        assert!(err.to_string().contains("mp3"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: PackError = io.into();
        assert!(matches!(err, PackError::Io(_)));
    }
}
