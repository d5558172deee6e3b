//! Error types for the DTED library.

use thiserror::Error;

use crate::source::Level;

/// Errors that can occur when working with DTED data.
#[derive(Error, Debug)]
pub enum DtedError {
    /// IO error when reading tile files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The byte buffer is shorter than the DTED layout requires.
    #[error("Truncated input: need {expected} bytes, got {actual}")]
    TruncatedInput { expected: usize, actual: usize },

    /// A header or record field could not be parsed.
    #[error("Malformed header: {reason}")]
    MalformedHeader { reason: String },

    /// A data record's stored checksum disagrees with the recomputed one.
    #[error(
        "Checksum mismatch in longitude record {column}: stored {stored:#010x}, computed {computed:#010x}"
    )]
    ChecksumMismatch {
        column: usize,
        stored: u32,
        computed: u32,
    },

    /// The source has no tile under this name at the given precision level.
    #[error("Tile {name} not found at precision level {level}")]
    TileNotFound { name: String, level: Level },

    /// Coordinates outside the valid latitude/longitude range.
    #[error("Coordinates out of bounds: lat={lat}, lon={lon} (valid: lat ±90°, lon ±180°)")]
    OutOfBounds { lat: f64, lon: f64 },

    /// HTTP transport error while fetching a remote tile.
    #[cfg(feature = "download")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias using [`DtedError`].
pub type Result<T> = std::result::Result<T, DtedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DtedError::TruncatedInput {
            expected: 3428,
            actual: 100,
        };
        assert!(err.to_string().contains("3428"));

        let err = DtedError::ChecksumMismatch {
            column: 17,
            stored: 0xdead,
            computed: 0xbeef,
        };
        assert!(err.to_string().contains("17"));

        let err = DtedError::TileNotFound {
            name: "e008/n53".to_string(),
            level: Level::Level2,
        };
        assert!(err.to_string().contains("e008/n53"));

        let err = DtedError::OutOfBounds {
            lat: 91.0,
            lon: 0.0,
        };
        assert!(err.to_string().contains("91"));
    }
}
