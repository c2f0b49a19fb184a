//! Stream errors.
//!
//! Only hard failures live here. Soft failures (end of data, a rejected seek,
//! a full memory buffer) are reported through return values instead.

use core::fmt;
use std::path::PathBuf;

/// Errors that can occur while constructing or driving a stream.
#[derive(Debug)]
#[non_exhaustive]
pub enum StreamError {
    /// A memory stream was given an empty buffer.
    InvalidBuffer,

    /// The file mode has no access bits or contains unknown bits.
    InvalidMode(u32),

    /// The file could not be opened.
    Open {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying file system error.
        source: std::io::Error,
    },

    /// The stream is not open.
    Closed,

    /// `close` was called on a file stream that is already closed.
    AlreadyClosed,

    /// The requested range lies outside the caller's buffer, or nothing could
    /// be written because the stream is full.
    OutOfBounds,

    /// Invalid seek position.
    InvalidSeek,

    /// Error from the underlying file system.
    Io(std::io::Error),
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBuffer => write!(f, "Invalid source buffer: size must be non-zero"),
            Self::InvalidMode(bits) => write!(f, "Invalid file mode {:#04x}", bits),
            Self::Open { path, source } => {
                write!(f, "Failed to open {}: {}", path.display(), source)
            }
            Self::Closed => write!(f, "Stream is closed"),
            Self::AlreadyClosed => write!(f, "Stream was already closed"),
            Self::OutOfBounds => write!(f, "Operation would exceed buffer bounds"),
            Self::InvalidSeek => write!(f, "Invalid seek position"),
            Self::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl core::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StreamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl embedded_io::Error for StreamError {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            Self::InvalidBuffer
            | Self::InvalidMode(_)
            | Self::OutOfBounds
            | Self::InvalidSeek => embedded_io::ErrorKind::InvalidInput,
            Self::Open { .. } | Self::Closed | Self::AlreadyClosed | Self::Io(_) => {
                embedded_io::ErrorKind::Other
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::error::Error;

    #[test]
    fn test_open_error_display() {
        let error = StreamError::Open {
            path: PathBuf::from("missing.bin"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };

        let msg = format!("{}", error);
        assert!(msg.contains("missing.bin"));
        assert!(msg.contains("not found"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_invalid_mode_display() {
        let msg = format!("{}", StreamError::InvalidMode(0x08));
        assert_eq!(msg, "Invalid file mode 0x08");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
        let error: StreamError = io_error.into();

        match error {
            StreamError::Io(_) => {} // Expected
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_embedded_io_kind() {
        use embedded_io::Error as _;

        assert_eq!(StreamError::InvalidSeek.kind(), embedded_io::ErrorKind::InvalidInput);
        assert_eq!(StreamError::Closed.kind(), embedded_io::ErrorKind::Other);
    }
}
