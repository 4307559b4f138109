//! Token vocabulary of the lexer core.
//!
//! Discriminants follow declaration order and travel across the C ABI as a
//! plain `u32`, so they are part of the ABI. Never reorder the variants.

/// Kind of a token produced by [`scan`](crate::scan).
#[repr(u32)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RawTokenKind {
    Integer,
    Double,
    Boolean,
    Plus,
    Minus,
    Not,
    Star,
    Divide,
    Xor,
    Percent,
    Or,
    And,
    Equal,
    Less,
    Greater,
    PlusPlus,
    MinusMinus,
    PlusEqual,
    MinusEqual,
    NotEqual,
    StarEqual,
    DivideEqual,
    XorEqual,
    PercentEqual,
    OrOr,
    AndAnd,
    EqualEqual,
    LessEqual,
    GreaterEqual,
    Dot,
    Identifier,
    Char,
    String,
    KMain,
    KVar,
    KIf,
    KWhile,
    KElse,
    KFor,
    KBreak,
    KFun,
    KReturn,
    KNullptr,
    OpenParenthesis,
    OpenSqParenthesis,
    OpenCurParenthesis,
    CloseParenthesis,
    CloseSqParenthesis,
    CloseCurParenthesis,
    Comma,
    Colon,
    TypeI8,
    TypeI16,
    TypeI32,
    TypeI64,
    TypeU8,
    TypeU16,
    TypeU32,
    TypeU64,
    TypeF32,
    TypeF64,
    TypeC32,
    TypeC64,
    TypeChar,
    TypeString,
    TypeBool,
    Comment,
    Unknown,
    Eoft,
}

impl RawTokenKind {
    /// Number of kinds.
    pub const COUNT: usize = 69;

    /// Every kind, indexed by discriminant.
    pub const ALL: [RawTokenKind; Self::COUNT] = [
        Self::Integer,
        Self::Double,
        Self::Boolean,
        Self::Plus,
        Self::Minus,
        Self::Not,
        Self::Star,
        Self::Divide,
        Self::Xor,
        Self::Percent,
        Self::Or,
        Self::And,
        Self::Equal,
        Self::Less,
        Self::Greater,
        Self::PlusPlus,
        Self::MinusMinus,
        Self::PlusEqual,
        Self::MinusEqual,
        Self::NotEqual,
        Self::StarEqual,
        Self::DivideEqual,
        Self::XorEqual,
        Self::PercentEqual,
        Self::OrOr,
        Self::AndAnd,
        Self::EqualEqual,
        Self::LessEqual,
        Self::GreaterEqual,
        Self::Dot,
        Self::Identifier,
        Self::Char,
        Self::String,
        Self::KMain,
        Self::KVar,
        Self::KIf,
        Self::KWhile,
        Self::KElse,
        Self::KFor,
        Self::KBreak,
        Self::KFun,
        Self::KReturn,
        Self::KNullptr,
        Self::OpenParenthesis,
        Self::OpenSqParenthesis,
        Self::OpenCurParenthesis,
        Self::CloseParenthesis,
        Self::CloseSqParenthesis,
        Self::CloseCurParenthesis,
        Self::Comma,
        Self::Colon,
        Self::TypeI8,
        Self::TypeI16,
        Self::TypeI32,
        Self::TypeI64,
        Self::TypeU8,
        Self::TypeU16,
        Self::TypeU32,
        Self::TypeU64,
        Self::TypeF32,
        Self::TypeF64,
        Self::TypeC32,
        Self::TypeC64,
        Self::TypeChar,
        Self::TypeString,
        Self::TypeBool,
        Self::Comment,
        Self::Unknown,
        Self::Eoft,
    ];

    /// Decode a wire discriminant. Returns `None` for values outside the
    /// vocabulary.
    #[inline]
    pub fn from_raw(raw: u32) -> Option<RawTokenKind> {
        let index = usize::try_from(raw).ok()?;
        Self::ALL.get(index).copied()
    }

    /// Wire discriminant of this kind.
    #[inline]
    pub const fn to_raw(self) -> u32 {
        self as u32
    }

    /// Classify a word matched by the identifier rule.
    ///
    /// Keywords, boolean literals, and built-in type names are reserved;
    /// anything else is an `Identifier`.
    pub fn from_word(word: &str) -> RawTokenKind {
        match word {
            "main" => Self::KMain,
            "var" => Self::KVar,
            "if" => Self::KIf,
            "while" => Self::KWhile,
            "else" => Self::KElse,
            "for" => Self::KFor,
            "break" => Self::KBreak,
            "fun" => Self::KFun,
            "return" => Self::KReturn,
            "nullptr" => Self::KNullptr,
            "true" | "false" => Self::Boolean,
            "i8" => Self::TypeI8,
            "i16" => Self::TypeI16,
            "i32" => Self::TypeI32,
            "i64" => Self::TypeI64,
            "u8" => Self::TypeU8,
            "u16" => Self::TypeU16,
            "u32" => Self::TypeU32,
            "u64" => Self::TypeU64,
            "f32" => Self::TypeF32,
            "f64" => Self::TypeF64,
            "c32" => Self::TypeC32,
            "c64" => Self::TypeC64,
            "char" => Self::TypeChar,
            "string" => Self::TypeString,
            "bool" => Self::TypeBool,
            _ => Self::Identifier,
        }
    }
}
