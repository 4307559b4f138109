//! Bridge error types.

use std::fmt;

use thiserror::Error;

/// Structural defect found in a transfer envelope.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeFault {
    #[error("null item buffer with {size} item(s)")]
    NullItems { size: usize },
    #[error("size {size} exceeds capacity {capacity}")]
    SizeExceedsCapacity { size: usize, capacity: usize },
}

/// Failure of [`validate`](crate::validate).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryError {
    #[error("invalid token envelope: {0}")]
    InvalidEnvelope(EnvelopeFault),
}

/// Which bridge argument was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BridgeArgument {
    FileName,
    Source,
}

impl fmt::Display for BridgeArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BridgeArgument::FileName => "file name",
            BridgeArgument::Source => "source",
        })
    }
}

/// Failure of a bridge call.
///
/// Either way, no partial token list is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// The tokenizer returned a structurally inconsistent envelope. Fatal;
    /// retrying a deterministic tokenizer reproduces it.
    #[error("invalid token envelope: {0}")]
    InvalidEnvelope(EnvelopeFault),
    /// An argument cannot be passed as a NUL-terminated string. Raised before
    /// the tokenizer is invoked.
    #[error("{argument} contains a NUL byte at offset {position}")]
    InteriorNul {
        argument: BridgeArgument,
        position: usize,
    },
}

impl BridgeError {
    pub fn is_invalid_envelope(&self) -> bool {
        matches!(self, BridgeError::InvalidEnvelope(_))
    }
}

impl From<BoundaryError> for BridgeError {
    fn from(err: BoundaryError) -> Self {
        match err {
            BoundaryError::InvalidEnvelope(fault) => BridgeError::InvalidEnvelope(fault),
        }
    }
}
