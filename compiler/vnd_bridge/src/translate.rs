//! Kind translation from the lexer core's vocabulary to [`TokenKind`].
//!
//! The two enumerations are maintained separately and do not share
//! ordinals. [`translate_kind`] is an exhaustive match, so a kind added to
//! the lexer core fails to compile here until it is mapped. [`translate`]
//! handles the wire form, where drift can only show up at runtime.

use vnd_ir::TokenKind;
use vnd_lexer_core::RawTokenKind;

/// Map a lexer core kind to its local kind. 1:1 over the whole vocabulary.
pub fn translate_kind(kind: RawTokenKind) -> TokenKind {
    match kind {
        // Literals
        RawTokenKind::Integer => TokenKind::Integer,
        RawTokenKind::Double => TokenKind::Double,
        RawTokenKind::Boolean => TokenKind::Boolean,
        RawTokenKind::Char => TokenKind::Char,
        RawTokenKind::String => TokenKind::String,

        // Operators
        RawTokenKind::Plus => TokenKind::Plus,
        RawTokenKind::Minus => TokenKind::Minus,
        RawTokenKind::Not => TokenKind::Not,
        RawTokenKind::Star => TokenKind::Star,
        RawTokenKind::Divide => TokenKind::Divide,
        RawTokenKind::Xor => TokenKind::Xor,
        RawTokenKind::Percent => TokenKind::Percent,
        RawTokenKind::Or => TokenKind::Or,
        RawTokenKind::And => TokenKind::And,
        RawTokenKind::Equal => TokenKind::Equal,
        RawTokenKind::Less => TokenKind::Less,
        RawTokenKind::Greater => TokenKind::Greater,
        RawTokenKind::PlusPlus => TokenKind::PlusPlus,
        RawTokenKind::MinusMinus => TokenKind::MinusMinus,
        RawTokenKind::PlusEqual => TokenKind::PlusEqual,
        RawTokenKind::MinusEqual => TokenKind::MinusEqual,
        RawTokenKind::NotEqual => TokenKind::NotEqual,
        RawTokenKind::StarEqual => TokenKind::StarEqual,
        RawTokenKind::DivideEqual => TokenKind::DivideEqual,
        RawTokenKind::XorEqual => TokenKind::XorEqual,
        RawTokenKind::PercentEqual => TokenKind::PercentEqual,
        RawTokenKind::OrOr => TokenKind::OrOr,
        RawTokenKind::AndAnd => TokenKind::AndAnd,
        RawTokenKind::EqualEqual => TokenKind::EqualEqual,
        RawTokenKind::LessEqual => TokenKind::LessEqual,
        RawTokenKind::GreaterEqual => TokenKind::GreaterEqual,

        // Punctuation
        RawTokenKind::Dot => TokenKind::Dot,
        RawTokenKind::Comma => TokenKind::Comma,
        RawTokenKind::Colon => TokenKind::Colon,
        RawTokenKind::OpenParenthesis => TokenKind::LParen,
        RawTokenKind::CloseParenthesis => TokenKind::RParen,
        RawTokenKind::OpenSqParenthesis => TokenKind::LBracket,
        RawTokenKind::CloseSqParenthesis => TokenKind::RBracket,
        RawTokenKind::OpenCurParenthesis => TokenKind::LBrace,
        RawTokenKind::CloseCurParenthesis => TokenKind::RBrace,

        // Keywords
        RawTokenKind::KMain => TokenKind::KwMain,
        RawTokenKind::KVar => TokenKind::KwVar,
        RawTokenKind::KIf => TokenKind::KwIf,
        RawTokenKind::KWhile => TokenKind::KwWhile,
        RawTokenKind::KElse => TokenKind::KwElse,
        RawTokenKind::KFor => TokenKind::KwFor,
        RawTokenKind::KBreak => TokenKind::KwBreak,
        RawTokenKind::KFun => TokenKind::KwFun,
        RawTokenKind::KReturn => TokenKind::KwReturn,
        RawTokenKind::KNullptr => TokenKind::KwNullptr,

        // Type names
        RawTokenKind::TypeI8 => TokenKind::I8,
        RawTokenKind::TypeI16 => TokenKind::I16,
        RawTokenKind::TypeI32 => TokenKind::I32,
        RawTokenKind::TypeI64 => TokenKind::I64,
        RawTokenKind::TypeU8 => TokenKind::U8,
        RawTokenKind::TypeU16 => TokenKind::U16,
        RawTokenKind::TypeU32 => TokenKind::U32,
        RawTokenKind::TypeU64 => TokenKind::U64,
        RawTokenKind::TypeF32 => TokenKind::F32,
        RawTokenKind::TypeF64 => TokenKind::F64,
        RawTokenKind::TypeC32 => TokenKind::C32,
        RawTokenKind::TypeC64 => TokenKind::C64,
        RawTokenKind::TypeChar => TokenKind::CharType,
        RawTokenKind::TypeString => TokenKind::StringType,
        RawTokenKind::TypeBool => TokenKind::BoolType,

        // Special
        RawTokenKind::Identifier => TokenKind::Identifier,
        RawTokenKind::Comment => TokenKind::Comment,
        RawTokenKind::Unknown => TokenKind::Unknown,
        RawTokenKind::Eoft => TokenKind::Eoft,
    }
}

/// Map a wire discriminant to its local kind.
///
/// Total: a discriminant outside the lexer core's vocabulary becomes
/// [`TokenKind::Unknown`].
pub fn translate(raw: u32) -> TokenKind {
    match RawTokenKind::from_raw(raw) {
        Some(kind) => translate_kind(kind),
        None => TokenKind::Unknown,
    }
}
