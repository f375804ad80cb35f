//! Error types for SCM/SCA decoding.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for decode operations.
///
/// Every variant aborts the decode that raised it; no partially populated
/// model or animation is ever returned.
#[derive(Error, Debug)]
pub enum Error {
    /// Source path does not exist, is a directory, or cannot be accessed
    #[error("Source not found: {0}")]
    SourceNotFound(PathBuf),

    /// Wrong 4-byte tag at the start of the file
    #[error("Bad magic: expected \"{expected}\", found {found:?}")]
    BadMagic {
        expected: &'static str,
        found: [u8; 4],
    },

    /// Format version other than the single supported one
    #[error("Unsupported format version {found}, this reader only supports version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Declared offset/length exceeds the available bytes, or a computed
    /// block size disagrees with a declared one
    #[error("Truncated input: {0}")]
    TruncatedInput(String),

    /// Bone parent index out of range, or the hierarchy contains a cycle
    #[error("Invalid bone link: {0}")]
    InvalidBoneLink(String),

    /// Triangle references a vertex index out of range
    #[error("Incomplete triangle: {0}")]
    IncompleteTriangle(String),

    /// Non-ASCII byte where strict ASCII is required
    #[error("Encoding error: non-ASCII byte 0x{byte:02X} at offset {offset}")]
    Encoding { offset: u64, byte: u8 },

    /// Memory mapping failed
    #[error("Memory mapping failed: {0}")]
    MmapFailed(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a truncated-input error for a read past end of data.
    pub fn truncated(offset: u64, needed: u64, available: u64) -> Self {
        Self::TruncatedInput(format!(
            "need {needed} bytes at offset {offset}, but only {available} remain"
        ))
    }
}

/// Result type alias for decode operations.
pub type Result<T> = std::result::Result<T, Error>;
