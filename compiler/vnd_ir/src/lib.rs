//! Vandior IR - token data model
//!
//! This crate holds the local token vocabulary seen by every consumer of
//! the Vandior front end:
//! - `TokenKind`, the closed set of lexical categories
//! - `SourceLocation` for file/line/column positions
//! - `Token` and the owned `TokenList` sequence
//!
//! Every type is a plain owned value with structural `Eq`/`Hash`. Nothing
//! here knows about the external tokenizer or its vocabulary; translation
//! happens in `vnd_bridge`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod location;
mod token;

pub use location::SourceLocation;
pub use token::{Token, TokenKind, TokenList};
