//! Error types for the fallible boundaries: setup validation and persistence.
//!
//! Gameplay itself never fails; these only surface from the setup layer and
//! from stores.

use thiserror::Error;

/// Rejected setup-screen configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Problem count outside the allowed range
    #[error("problem count {count} outside {min}..={max}")]
    ProblemCountOutOfRange { count: u32, min: u32, max: u32 },

    /// Every operation disabled
    #[error("at least one operation must be enabled")]
    NoOperationEnabled,

    /// Operand bound outside an operation's limit
    #[error("{operation} max number {value} outside 1..={limit}")]
    MaxNumberOutOfRange {
        operation: &'static str,
        value: u32,
        limit: u32,
    },
}

/// Persistence failures. Reported by stores, never raised by gameplay.
#[derive(Debug, Error)]
pub enum SaveError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// File written by an incompatible version
    #[error("Invalid save version: expected 0x{expected:016X}, got 0x{actual:016X}")]
    VersionMismatch { expected: u64, actual: u64 },

    /// Stored checksum does not match the payload
    #[error("Checksum verification failed")]
    ChecksumMismatch,

    /// No platform directory for save files
    #[error("Could not determine config directory")]
    NoConfigDir,
}

impl From<bincode::Error> for SaveError {
    fn from(err: bincode::Error) -> Self {
        SaveError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(err: serde_json::Error) -> Self {
        SaveError::Serialization(err.to_string())
    }
}
