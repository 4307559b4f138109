//! Bridge orchestration: tokenize, validate, copy, release.
//!
//! # Lifecycle
//!
//! ```text
//! success: EnvelopeReceived -> Validated -> Copied -> Released
//! failure: EnvelopeReceived -> Rejected -> Released
//! ```
//!
//! The envelope is wrapped in a guard as soon as the tokenizer returns it.
//! Dropping the guard releases the foreign storage, so release happens
//! exactly once on every path, including unwinding.

use std::ffi::{c_char, CStr, CString};
use std::fmt;

use rayon::prelude::*;
use tracing::{debug, trace};
use vnd_ir::{SourceLocation, Token, TokenList};
use vnd_lexer_core::RawToken;

use crate::{
    translate, validate, BridgeArgument, BridgeError, CoreTokenizer, TokenSource,
    TransferEnvelope,
};

/// Stage of a single bridge call, as reported in trace events.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BridgeStage {
    EnvelopeReceived,
    Validated,
    Copied,
    Released,
    Rejected,
}

impl BridgeStage {
    pub fn as_str(self) -> &'static str {
        match self {
            BridgeStage::EnvelopeReceived => "envelope-received",
            BridgeStage::Validated => "validated",
            BridgeStage::Copied => "copied",
            BridgeStage::Released => "released",
            BridgeStage::Rejected => "rejected",
        }
    }
}

impl fmt::Display for BridgeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sole owner of an envelope between `tokenize` and `release`.
struct ReceivedEnvelope<'s, S: TokenSource + ?Sized> {
    source: &'s S,
    envelope: TransferEnvelope,
}

impl<'s, S: TokenSource + ?Sized> ReceivedEnvelope<'s, S> {
    fn new(source: &'s S, envelope: TransferEnvelope) -> Self {
        trace!(
            stage = %BridgeStage::EnvelopeReceived,
            size = envelope.size,
            capacity = envelope.capacity
        );
        ReceivedEnvelope { source, envelope }
    }
}

impl<S: TokenSource + ?Sized> Drop for ReceivedEnvelope<'_, S> {
    fn drop(&mut self) {
        let envelope = std::mem::replace(&mut self.envelope, TransferEnvelope::EMPTY);
        // SAFETY: `envelope` came from `self.source.tokenize`, and this guard
        // is its only owner; `replace` leaves nothing behind to release twice.
        unsafe { self.source.release(envelope) };
        trace!(stage = %BridgeStage::Released);
    }
}

/// Bridges token batches from a [`TokenSource`] into owned [`TokenList`]s.
#[derive(Clone, Debug)]
pub struct Bridge<S = CoreTokenizer> {
    source: S,
}

impl Bridge<CoreTokenizer> {
    /// Bridge backed by the lexer core.
    pub fn core() -> Self {
        Bridge::new(CoreTokenizer)
    }
}

impl Default for Bridge<CoreTokenizer> {
    fn default() -> Self {
        Bridge::core()
    }
}

impl<S: TokenSource> Bridge<S> {
    pub fn new(source: S) -> Self {
        Bridge { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Tokenize `source` and copy the result into an owned [`TokenList`].
    ///
    /// The envelope is validated before any element is read. On success
    /// every element is copied, with kinds translated to the local
    /// vocabulary and text and locations copied verbatim. On failure no
    /// tokens are returned. The tokenizer's storage is released exactly once
    /// either way.
    #[tracing::instrument(level = "debug", skip_all, fields(file = file_name))]
    pub fn bridge(&self, file_name: &str, source: &str) -> Result<TokenList, BridgeError> {
        let file_name_c = to_c_string(file_name, BridgeArgument::FileName)?;
        let source_c = to_c_string(source, BridgeArgument::Source)?;

        let received = ReceivedEnvelope::new(
            &self.source,
            self.source.tokenize(&file_name_c, &source_c),
        );

        if let Err(err) = validate(&received.envelope) {
            trace!(stage = %BridgeStage::Rejected, %err);
            return Err(err.into());
        }
        trace!(stage = %BridgeStage::Validated);

        // SAFETY: the envelope passed validation, and `received` keeps its
        // storage alive until the copy is finished.
        let tokens = unsafe { copy_tokens(&received.envelope) };
        trace!(stage = %BridgeStage::Copied, count = tokens.len());

        drop(received);
        debug!(tokens = tokens.len(), "bridged");
        Ok(tokens)
    }

    /// Bridge a batch of `(file_name, source)` inputs in parallel.
    ///
    /// Each input gets its own tokenizer call and envelope. Results are in
    /// input order; one failure does not affect the others.
    pub fn bridge_all<N, T>(&self, inputs: &[(N, T)]) -> Vec<Result<TokenList, BridgeError>>
    where
        N: AsRef<str> + Sync,
        T: AsRef<str> + Sync,
    {
        inputs
            .par_iter()
            .map(|(file_name, source)| self.bridge(file_name.as_ref(), source.as_ref()))
            .collect()
    }
}

fn to_c_string(text: &str, argument: BridgeArgument) -> Result<CString, BridgeError> {
    CString::new(text).map_err(|err| BridgeError::InteriorNul {
        argument,
        position: err.nul_position(),
    })
}

/// Copy every item of a validated envelope.
///
/// # Safety
///
/// `envelope` must have passed [`validate`]; its first `size` items must be
/// initialized, and each non-null string in them NUL-terminated. The
/// storage must stay alive for the duration of the call.
unsafe fn copy_tokens(envelope: &TransferEnvelope) -> TokenList {
    if envelope.size == 0 {
        return TokenList::new();
    }
    // SAFETY: non-null and `size` initialized items, guaranteed by the caller.
    let items = unsafe { std::slice::from_raw_parts(envelope.items, envelope.size) };
    let mut tokens = Vec::with_capacity(items.len());
    for item in items {
        // SAFETY: as above.
        tokens.push(unsafe { copy_token(item) });
    }
    TokenList::from_vec(tokens)
}

/// # Safety
///
/// Each non-null string in `item` must be NUL-terminated.
unsafe fn copy_token(item: &RawToken) -> Token {
    // SAFETY: guaranteed by the caller.
    let (text, file_name) = unsafe {
        (
            copy_text(item.value),
            copy_text(item.location.file_name),
        )
    };
    Token::new(
        translate(item.kind),
        text,
        SourceLocation::new(file_name, item.location.line, item.location.column),
    )
}

/// Null reads as empty; invalid UTF-8 is replaced.
///
/// # Safety
///
/// A non-null `text` must be NUL-terminated.
unsafe fn copy_text(text: *const c_char) -> String {
    if text.is_null() {
        return String::new();
    }
    // SAFETY: guaranteed by the caller.
    unsafe { CStr::from_ptr(text) }
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
