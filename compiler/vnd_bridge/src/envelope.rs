//! Transfer envelope and its structural check.

use crate::{BoundaryError, EnvelopeFault};

/// The batch handed over by the tokenizer: `{ items, size, capacity }`.
///
/// Owns foreign storage. Never `Send` or `Sync`, so an envelope cannot be
/// shared across threads.
pub type TransferEnvelope = vnd_lexer_core::TokenArray;

/// Check an envelope's structural soundness.
///
/// Looks only at the three scalar fields; `items` is never dereferenced.
/// Checks run in order: a null buffer with `size > 0` first, then
/// `size <= capacity`. An empty envelope passes whatever `items` holds.
pub fn validate(envelope: &TransferEnvelope) -> Result<(), BoundaryError> {
    if envelope.size > 0 && envelope.items.is_null() {
        return Err(BoundaryError::InvalidEnvelope(EnvelopeFault::NullItems {
            size: envelope.size,
        }));
    }
    if envelope.size > envelope.capacity {
        return Err(BoundaryError::InvalidEnvelope(
            EnvelopeFault::SizeExceedsCapacity {
                size: envelope.size,
                capacity: envelope.capacity,
            },
        ));
    }
    Ok(())
}
