//! Error types for segmentation operations

use crate::classes::BoundaryKind;
use thiserror::Error;

/// Error type for segmentation operations
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Malformed byte sequence in the source buffer
    #[error("malformed input at byte offset {position} spanning {byte_len} byte(s)")]
    Decode {
        /// Byte offset of the start of the invalid sequence
        position: usize,
        /// Number of source bytes covered by the invalid sequence
        byte_len: usize,
    },

    /// Break data failed load-time validation
    #[error("invalid break data: {0}")]
    InvalidTable(String),

    /// Internal inconsistency detected while scanning
    #[error("engine fault during {kind} scan: {reason}")]
    EngineFault {
        /// Boundary analysis that was running
        kind: BoundaryKind,
        /// Description of the inconsistency
        reason: String,
    },

    /// Configuration error (suppression overlays, builder misuse)
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for segmentation operations
pub type Result<T> = std::result::Result<T, Error>;
