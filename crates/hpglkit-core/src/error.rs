//! Error handling for hpglkit
//!
//! Provides the error types shared by every layer:
//! - HPGL errors (command decoding, loading, degenerate paths)
//! - I/O errors
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// HPGL error type
///
/// Represents errors related to decoding and loading HPGL command streams.
/// Unknown tokens are not fatal to a parse; the parser records them and
/// keeps going.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HpglError {
    /// Token does not start with a supported mnemonic
    #[error("Unknown command: {token}")]
    UnknownCommand {
        /// The offending token, trimmed.
        token: String,
    },

    /// Mnemonic is known but its arguments do not fit its grammar
    #[error("Invalid parameters for {mnemonic}: {reason}")]
    InvalidParameter {
        /// The two-letter mnemonic.
        mnemonic: String,
        /// Why the arguments were rejected.
        reason: String,
    },

    /// Input contained no commands at all
    #[error("Empty input: {origin}")]
    EmptyInput {
        /// Where the input came from (file path or "<string>").
        origin: String,
    },

    /// Input file could not be read
    #[error("Failed to load {path}: {reason}")]
    LoadFailed {
        /// The path that failed to load.
        path: String,
        /// The underlying failure.
        reason: String,
    },

    /// A path was built from fewer than two points
    #[error("Path needs at least 2 points, got {points}")]
    DegeneratePath {
        /// Number of points supplied.
        points: usize,
    },
}

/// Main error type for hpglkit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// HPGL error
    #[error(transparent)]
    Hpgl(#[from] HpglError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an HPGL error
    pub fn is_hpgl_error(&self) -> bool {
        matches!(self, Error::Hpgl(_))
    }

    /// Check if this error means the input could not be loaded at all
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            Error::Io(_)
                | Error::Hpgl(HpglError::LoadFailed { .. })
                | Error::Hpgl(HpglError::EmptyInput { .. })
        )
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hpgl_error_display() {
        let err = HpglError::UnknownCommand {
            token: "XX1,2".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown command: XX1,2");

        let err = HpglError::InvalidParameter {
            mnemonic: "PD".to_string(),
            reason: "odd number of coordinates".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid parameters for PD: odd number of coordinates"
        );

        let err = HpglError::DegeneratePath { points: 1 };
        assert_eq!(err.to_string(), "Path needs at least 2 points, got 1");
    }

    #[test]
    fn test_error_classification() {
        let err: Error = HpglError::EmptyInput {
            origin: "job.hpgl".to_string(),
        }
        .into();
        assert!(err.is_hpgl_error());
        assert!(err.is_load_failure());

        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(!err.is_hpgl_error());
        assert!(err.is_load_failure());

        let err = Error::other("something else");
        assert!(!err.is_load_failure());
        assert_eq!(err.to_string(), "something else");
    }
}
