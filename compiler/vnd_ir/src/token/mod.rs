//! Token types for the Vandior front end.
//!
//! A [`Token`] owns its text and location outright; nothing in here borrows
//! from the source buffer or from the tokenizer's allocation domain.

mod kind;
mod list;

pub use kind::TokenKind;
pub use list::TokenList;

use std::fmt;

use crate::SourceLocation;

/// A classified, located fragment of source text.
///
/// `text` is the lexeme as the tokenizer reported it, without any
/// normalization (string and char literals arrive without their quotes).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Token {
            kind,
            text: text.into(),
            location,
        }
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_any_of(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Compact rendering used by the alternate `Display` form.
    pub fn to_compact_string(&self) -> String {
        if self.text.is_empty() {
            format!("(typ: {:#}, sl: {:#})", self.kind, self.location)
        } else {
            format!(
                "(typ: {:#}, val: '{}', sl: {:#})",
                self.kind, self.text, self.location
            )
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return f.write_str(&self.to_compact_string());
        }
        if self.text.is_empty() {
            write!(f, "Token(type: {}, location: {})", self.kind, self.location)
        } else {
            write!(
                f,
                "Token(type: {}, value: '{}', location: {})",
                self.kind, self.text, self.location
            )
        }
    }
}

// Size assertions to prevent accidental regressions in frequently-allocated types.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind};
    // TokenKind is a fieldless repr(u8) enum.
    crate::static_assert_size!(TokenKind, 1);
    // kind (1, padded to 8) + text (24) + location (24 + 8 + 8) = 72 bytes
    crate::static_assert_size!(Token, 72);
}
