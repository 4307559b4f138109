//! Vandior lexer core (`libvnd_lexer_core`)
//!
//! Standalone tokenizer for Vandior source text, exposed through a C ABI so
//! that foreign front ends can link it directly.
//!
//! # Layers
//!
//! - **Vocabulary**: [`RawTokenKind`], this crate's own token kinds. They are
//!   maintained here and nowhere else; consumers receive them as plain `u32`
//!   discriminants.
//! - **Scanner**: [`scan`] turns source text into [`ScannedToken`]s that
//!   borrow from the input. Pure Rust, no allocation per token.
//! - **FFI**: [`vnd_tokenize`] / [`vnd_token_array_free`] move a batch of
//!   tokens across the boundary as a [`TokenArray`] `{ items, size, capacity }`.
//!
//! # Ownership
//!
//! Every [`TokenArray`] returned by [`vnd_tokenize`] (or [`tokenize`]) owns
//! its item buffer and every string inside it. It must be passed to
//! [`vnd_token_array_free`] exactly once.
//!
//! # Error convention
//!
//! Scanning never fails. Text the scanner cannot classify becomes a token
//! of kind [`RawTokenKind::Unknown`] carrying the offending text, and every
//! stream ends with exactly one [`RawTokenKind::Eoft`].

mod ffi;
mod kind;
mod scanner;

pub use ffi::{
    tokenize, vnd_token_array_free, vnd_tokenize, RawSourceLocation, RawToken, TokenArray,
};
pub use kind::RawTokenKind;
pub use scanner::{scan, ScannedToken};
