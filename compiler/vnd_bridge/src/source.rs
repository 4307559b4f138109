//! The seam to the external tokenizer.

use std::ffi::CStr;

use crate::TransferEnvelope;

/// Something that tokenizes source text into a [`TransferEnvelope`] and
/// takes the envelope back afterwards.
///
/// Implementations must tolerate concurrent calls; [`Bridge::bridge_all`]
/// invokes `tokenize` from several threads at once.
///
/// [`Bridge::bridge_all`]: crate::Bridge::bridge_all
pub trait TokenSource: Sync {
    /// Tokenize `source`. Neither argument is retained after the call.
    fn tokenize(&self, file_name: &CStr, source: &CStr) -> TransferEnvelope;

    /// Give back an envelope returned by [`tokenize`](Self::tokenize).
    ///
    /// # Safety
    ///
    /// `envelope` must have come from this source's `tokenize` and must not
    /// have been released already. Nothing it points to may be read
    /// afterwards.
    unsafe fn release(&self, envelope: TransferEnvelope);
}

/// [`TokenSource`] backed by the lexer core's C ABI.
#[derive(Copy, Clone, Debug, Default)]
pub struct CoreTokenizer;

impl TokenSource for CoreTokenizer {
    fn tokenize(&self, file_name: &CStr, source: &CStr) -> TransferEnvelope {
        vnd_lexer_core::vnd_tokenize(file_name.as_ptr(), source.as_ptr())
    }

    unsafe fn release(&self, envelope: TransferEnvelope) {
        vnd_lexer_core::vnd_token_array_free(envelope);
    }
}
