//! Token kinds for Vandior.

use std::fmt;

/// Token kinds for Vandior.
///
/// This is the local vocabulary: the only set of kinds downstream
/// consumers ever see. The external tokenizer keeps its own, separately
/// maintained enumeration; `vnd_bridge` owns the mapping between the two.
///
/// Discriminants are grouped in semantic ranges with gaps for expansion:
///
/// | Range   | Category            |
/// |---------|---------------------|
/// | 0-9     | Literals            |
/// | 10-39   | Operators           |
/// | 40-49   | Punctuation         |
/// | 50-59   | Keywords            |
/// | 60-79   | Primitive type names|
/// | 120-127 | Special             |
///
/// The values are internal to this crate. They are never sent across the
/// tokenizer boundary and never compared against external ordinals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenKind {
    // === Literals (0-9) ===
    Integer = 0,
    Double = 1,
    Boolean = 2,
    Char = 3,
    String = 4,

    // === Operators (10-39) ===
    Plus = 10,
    Minus = 11,
    Star = 12,
    Divide = 13,
    Percent = 14,
    Not = 15,
    Xor = 16,
    Or = 17,
    And = 18,
    Equal = 19,
    Less = 20,
    Greater = 21,
    PlusPlus = 22,
    MinusMinus = 23,
    PlusEqual = 24,
    MinusEqual = 25,
    StarEqual = 26,
    DivideEqual = 27,
    PercentEqual = 28,
    XorEqual = 29,
    NotEqual = 30,
    EqualEqual = 31,
    LessEqual = 32,
    GreaterEqual = 33,
    OrOr = 34,
    AndAnd = 35,

    // === Punctuation (40-49) ===
    Dot = 40,
    Comma = 41,
    Colon = 42,
    LParen = 43,   // (
    RParen = 44,   // )
    LBracket = 45, // [
    RBracket = 46, // ]
    LBrace = 47,   // {
    RBrace = 48,   // }

    // === Keywords (50-59) ===
    KwMain = 50,
    KwVar = 51,
    KwIf = 52,
    KwWhile = 53,
    KwElse = 54,
    KwFor = 55,
    KwBreak = 56,
    KwFun = 57,
    KwReturn = 58,
    KwNullptr = 59,

    // === Primitive type names (60-79) ===
    I8 = 60,
    I16 = 61,
    I32 = 62,
    I64 = 63,
    U8 = 64,
    U16 = 65,
    U32 = 66,
    U64 = 67,
    F32 = 68,
    F64 = 69,
    C32 = 70,
    C64 = 71,
    CharType = 72,   // char
    StringType = 73, // string
    BoolType = 74,   // bool

    // === Special (120-127) ===
    Identifier = 120,
    Comment = 121,
    /// Catch-all for anything the tokenizer could not classify, and for
    /// external kinds this vocabulary does not recognize.
    Unknown = 122,
    /// End-of-token-stream sentinel.
    Eoft = 123,
}

impl TokenKind {
    /// Number of variants.
    pub const COUNT: usize = 69;

    /// Every variant, in discriminant order.
    pub const ALL: [TokenKind; Self::COUNT] = [
        TokenKind::Integer,
        TokenKind::Double,
        TokenKind::Boolean,
        TokenKind::Char,
        TokenKind::String,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Divide,
        TokenKind::Percent,
        TokenKind::Not,
        TokenKind::Xor,
        TokenKind::Or,
        TokenKind::And,
        TokenKind::Equal,
        TokenKind::Less,
        TokenKind::Greater,
        TokenKind::PlusPlus,
        TokenKind::MinusMinus,
        TokenKind::PlusEqual,
        TokenKind::MinusEqual,
        TokenKind::StarEqual,
        TokenKind::DivideEqual,
        TokenKind::PercentEqual,
        TokenKind::XorEqual,
        TokenKind::NotEqual,
        TokenKind::EqualEqual,
        TokenKind::LessEqual,
        TokenKind::GreaterEqual,
        TokenKind::OrOr,
        TokenKind::AndAnd,
        TokenKind::Dot,
        TokenKind::Comma,
        TokenKind::Colon,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::KwMain,
        TokenKind::KwVar,
        TokenKind::KwIf,
        TokenKind::KwWhile,
        TokenKind::KwElse,
        TokenKind::KwFor,
        TokenKind::KwBreak,
        TokenKind::KwFun,
        TokenKind::KwReturn,
        TokenKind::KwNullptr,
        TokenKind::I8,
        TokenKind::I16,
        TokenKind::I32,
        TokenKind::I64,
        TokenKind::U8,
        TokenKind::U16,
        TokenKind::U32,
        TokenKind::U64,
        TokenKind::F32,
        TokenKind::F64,
        TokenKind::C32,
        TokenKind::C64,
        TokenKind::CharType,
        TokenKind::StringType,
        TokenKind::BoolType,
        TokenKind::Identifier,
        TokenKind::Comment,
        TokenKind::Unknown,
        TokenKind::Eoft,
    ];

    /// Literal kinds: numbers, booleans, chars and strings.
    #[inline]
    pub fn is_literal(self) -> bool {
        (self as u8) < 10
    }

    #[inline]
    pub fn is_operator(self) -> bool {
        (10..40).contains(&(self as u8))
    }

    #[inline]
    pub fn is_punctuation(self) -> bool {
        (40..50).contains(&(self as u8))
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        (50..60).contains(&(self as u8))
    }

    /// Primitive type names (`i8`, `f64`, `string`, ...).
    #[inline]
    pub fn is_type_name(self) -> bool {
        (60..80).contains(&(self as u8))
    }

    /// Resolve a reserved word to its keyword kind.
    ///
    /// Returns `None` for anything that is not a keyword, including the
    /// boolean literals and primitive type names.
    pub fn keyword_from_str(word: &str) -> Option<TokenKind> {
        match word {
            "main" => Some(TokenKind::KwMain),
            "var" => Some(TokenKind::KwVar),
            "if" => Some(TokenKind::KwIf),
            "while" => Some(TokenKind::KwWhile),
            "else" => Some(TokenKind::KwElse),
            "for" => Some(TokenKind::KwFor),
            "break" => Some(TokenKind::KwBreak),
            "fun" => Some(TokenKind::KwFun),
            "return" => Some(TokenKind::KwReturn),
            "nullptr" => Some(TokenKind::KwNullptr),
            _ => None,
        }
    }

    /// Source text of kinds that always spell the same way.
    ///
    /// Returns `None` for kinds whose text varies (literals, identifiers,
    /// comments, `Unknown`) and for `Eoft`.
    pub fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Divide => "/",
            TokenKind::Percent => "%",
            TokenKind::Not => "!",
            TokenKind::Xor => "^",
            TokenKind::Or => "|",
            TokenKind::And => "&",
            TokenKind::Equal => "=",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::PlusEqual => "+=",
            TokenKind::MinusEqual => "-=",
            TokenKind::StarEqual => "*=",
            TokenKind::DivideEqual => "/=",
            TokenKind::PercentEqual => "%=",
            TokenKind::XorEqual => "^=",
            TokenKind::NotEqual => "!=",
            TokenKind::EqualEqual => "==",
            TokenKind::LessEqual => "<=",
            TokenKind::GreaterEqual => ">=",
            TokenKind::OrOr => "||",
            TokenKind::AndAnd => "&&",
            TokenKind::Dot => ".",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::KwMain => "main",
            TokenKind::KwVar => "var",
            TokenKind::KwIf => "if",
            TokenKind::KwWhile => "while",
            TokenKind::KwElse => "else",
            TokenKind::KwFor => "for",
            TokenKind::KwBreak => "break",
            TokenKind::KwFun => "fun",
            TokenKind::KwReturn => "return",
            TokenKind::KwNullptr => "nullptr",
            TokenKind::I8 => "i8",
            TokenKind::I16 => "i16",
            TokenKind::I32 => "i32",
            TokenKind::I64 => "i64",
            TokenKind::U8 => "u8",
            TokenKind::U16 => "u16",
            TokenKind::U32 => "u32",
            TokenKind::U64 => "u64",
            TokenKind::F32 => "f32",
            TokenKind::F64 => "f64",
            TokenKind::C32 => "c32",
            TokenKind::C64 => "c64",
            TokenKind::CharType => "char",
            TokenKind::StringType => "string",
            TokenKind::BoolType => "bool",
            TokenKind::Integer
            | TokenKind::Double
            | TokenKind::Boolean
            | TokenKind::Char
            | TokenKind::String
            | TokenKind::Identifier
            | TokenKind::Comment
            | TokenKind::Unknown
            | TokenKind::Eoft => return None,
        };
        Some(text)
    }

    /// Variant name, as rendered by `{}`.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Integer => "Integer",
            TokenKind::Double => "Double",
            TokenKind::Boolean => "Boolean",
            TokenKind::Char => "Char",
            TokenKind::String => "String",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Star => "Star",
            TokenKind::Divide => "Divide",
            TokenKind::Percent => "Percent",
            TokenKind::Not => "Not",
            TokenKind::Xor => "Xor",
            TokenKind::Or => "Or",
            TokenKind::And => "And",
            TokenKind::Equal => "Equal",
            TokenKind::Less => "Less",
            TokenKind::Greater => "Greater",
            TokenKind::PlusPlus => "PlusPlus",
            TokenKind::MinusMinus => "MinusMinus",
            TokenKind::PlusEqual => "PlusEqual",
            TokenKind::MinusEqual => "MinusEqual",
            TokenKind::StarEqual => "StarEqual",
            TokenKind::DivideEqual => "DivideEqual",
            TokenKind::PercentEqual => "PercentEqual",
            TokenKind::XorEqual => "XorEqual",
            TokenKind::NotEqual => "NotEqual",
            TokenKind::EqualEqual => "EqualEqual",
            TokenKind::LessEqual => "LessEqual",
            TokenKind::GreaterEqual => "GreaterEqual",
            TokenKind::OrOr => "OrOr",
            TokenKind::AndAnd => "AndAnd",
            TokenKind::Dot => "Dot",
            TokenKind::Comma => "Comma",
            TokenKind::Colon => "Colon",
            TokenKind::LParen => "LParen",
            TokenKind::RParen => "RParen",
            TokenKind::LBracket => "LBracket",
            TokenKind::RBracket => "RBracket",
            TokenKind::LBrace => "LBrace",
            TokenKind::RBrace => "RBrace",
            TokenKind::KwMain => "KwMain",
            TokenKind::KwVar => "KwVar",
            TokenKind::KwIf => "KwIf",
            TokenKind::KwWhile => "KwWhile",
            TokenKind::KwElse => "KwElse",
            TokenKind::KwFor => "KwFor",
            TokenKind::KwBreak => "KwBreak",
            TokenKind::KwFun => "KwFun",
            TokenKind::KwReturn => "KwReturn",
            TokenKind::KwNullptr => "KwNullptr",
            TokenKind::I8 => "I8",
            TokenKind::I16 => "I16",
            TokenKind::I32 => "I32",
            TokenKind::I64 => "I64",
            TokenKind::U8 => "U8",
            TokenKind::U16 => "U16",
            TokenKind::U32 => "U32",
            TokenKind::U64 => "U64",
            TokenKind::F32 => "F32",
            TokenKind::F64 => "F64",
            TokenKind::C32 => "C32",
            TokenKind::C64 => "C64",
            TokenKind::CharType => "CharType",
            TokenKind::StringType => "StringType",
            TokenKind::BoolType => "BoolType",
            TokenKind::Identifier => "Identifier",
            TokenKind::Comment => "Comment",
            TokenKind::Unknown => "Unknown",
            TokenKind::Eoft => "Eoft",
        }
    }

    /// Short uppercase label, as rendered by `{:#}`.
    pub fn compact_name(self) -> &'static str {
        match self {
            TokenKind::Integer => "INT",
            TokenKind::Double => "DBL",
            TokenKind::Boolean => "BOOL",
            TokenKind::Char => "CH",
            TokenKind::String => "STR",
            TokenKind::Plus => "PLUS_OP",
            TokenKind::Minus => "MINUS_OP",
            TokenKind::Star => "STAR_OP",
            TokenKind::Divide => "DIVIDE_OP",
            TokenKind::Percent => "PERCENT_OP",
            TokenKind::Not => "NOT_OP",
            TokenKind::Xor => "XOR_OP",
            TokenKind::Or => "OR_OP",
            TokenKind::And => "AND_OP",
            TokenKind::Equal => "EQUAL_OP",
            TokenKind::Less => "LESS_OP",
            TokenKind::Greater => "GREATER_OP",
            TokenKind::PlusPlus => "PLUSPLUS_OP",
            TokenKind::MinusMinus => "MINUSMINUS_OP",
            TokenKind::PlusEqual => "PLUSEQUAL_OP",
            TokenKind::MinusEqual => "MINUSEQUAL_OP",
            TokenKind::StarEqual => "STAREQUAL_OP",
            TokenKind::DivideEqual => "DIVIDEEQUAL_OP",
            TokenKind::PercentEqual => "PERCENTEQUAL_OP",
            TokenKind::XorEqual => "XOREQUAL_OP",
            TokenKind::NotEqual => "NOTEQUAL_OP",
            TokenKind::EqualEqual => "EQUALEQUAL_OP",
            TokenKind::LessEqual => "LESSEQUAL_OP",
            TokenKind::GreaterEqual => "GREATEREQUAL_OP",
            TokenKind::OrOr => "OROR_OP",
            TokenKind::AndAnd => "ANDAND_OP",
            TokenKind::Dot => "DOT_OP",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::LParen => "OPEN_PAR",
            TokenKind::RParen => "CLOSE_PAR",
            TokenKind::LBracket => "OPEN_SQ_PAR",
            TokenKind::RBracket => "CLOSE_SQ_PAR",
            TokenKind::LBrace => "OPEN_CUR_PAR",
            TokenKind::RBrace => "CLOSE_CUR_PAR",
            TokenKind::KwMain => "K_MAIN",
            TokenKind::KwVar => "K_VAR",
            TokenKind::KwIf => "K_IF",
            TokenKind::KwWhile => "K_WHILE",
            TokenKind::KwElse => "K_ELSE",
            TokenKind::KwFor => "K_FOR",
            TokenKind::KwBreak => "K_BREAK",
            TokenKind::KwFun => "K_FUN",
            TokenKind::KwReturn => "K_RETURN",
            TokenKind::KwNullptr => "K_NULLPTR",
            TokenKind::I8 => "I8",
            TokenKind::I16 => "I16",
            TokenKind::I32 => "I32",
            TokenKind::I64 => "I64",
            TokenKind::U8 => "U8",
            TokenKind::U16 => "U16",
            TokenKind::U32 => "U32",
            TokenKind::U64 => "U64",
            TokenKind::F32 => "F32",
            TokenKind::F64 => "F64",
            TokenKind::C32 => "C32",
            TokenKind::C64 => "C64",
            TokenKind::CharType => "CHAR",
            TokenKind::StringType => "STRING",
            TokenKind::BoolType => "BOOL_T",
            TokenKind::Identifier => "IDENT",
            TokenKind::Comment => "COMMENT",
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::Eoft => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(self.compact_name())
        } else {
            f.write_str(self.display_name())
        }
    }
}
