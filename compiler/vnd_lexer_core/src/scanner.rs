//! Source scanner.
//!
//! Built on logos. The grammar recognizes words, numbers, literals,
//! comments, and operators; word classification (keywords, booleans, type
//! names) happens afterwards in [`RawTokenKind::from_word`], which keeps
//! the automaton small.

use logos::Logos;

use crate::RawTokenKind;

/// Lexemes recognized by the logos automaton.
#[derive(Logos, Copy, Clone, Debug, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f\u{00A0}\u{1680}\u{2000}-\u{200A}\u{202F}\u{205F}\u{3000}]+")]
enum Lexeme {
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", priority = 3)]
    AsciiWord,
    #[regex(r"[\p{Letter}\p{Mark}_][\p{Letter}\p{Mark}\p{Number}_]*", priority = 2)]
    UnicodeWord,

    // Decimal, fractional, exponent, and imaginary/float suffixed forms
    #[regex(r"([0-9]*\.[0-9]+|[0-9]+\.|[0-9]+)([eE][+-]?[0-9]+)?[if]*")]
    Decimal,
    #[regex(r"#[0-9a-fA-F]+")]
    Hexadecimal,
    #[regex(r"#o[0-7]+")]
    Octal,
    #[regex(r"##[01]+")]
    Binary,

    #[regex(r"//[^\n]*")]
    LineComment,
    #[regex(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/")]
    BlockComment,

    #[regex(r#""([^"\\]|\\.)*""#)]
    String,
    #[regex(r#"'([^'\\]|\\.)'"#)]
    Char,

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("!")]
    Bang,
    #[token("^")]
    Caret,
    #[token("|")]
    Pipe,
    #[token("&")]
    Amp,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,
    #[token("%=")]
    PercentEq,
    #[token("^=")]
    CaretEq,
    #[token("!=")]
    NotEq,
    #[token("==")]
    EqEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("||")]
    PipePipe,
    #[token("&&")]
    AmpAmp,

    // Punctuation
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
}

impl Lexeme {
    /// Final kind and reported text for a matched slice.
    fn classify(self, slice: &str) -> (RawTokenKind, &str) {
        let kind = match self {
            Lexeme::AsciiWord | Lexeme::UnicodeWord => RawTokenKind::from_word(slice),
            Lexeme::Decimal if slice.contains('.') => RawTokenKind::Double,
            Lexeme::Decimal | Lexeme::Hexadecimal | Lexeme::Octal | Lexeme::Binary => {
                RawTokenKind::Integer
            }
            Lexeme::LineComment | Lexeme::BlockComment => RawTokenKind::Comment,
            Lexeme::String => return (RawTokenKind::String, strip_quotes(slice, '"')),
            Lexeme::Char => return (RawTokenKind::Char, strip_quotes(slice, '\'')),
            Lexeme::Plus => RawTokenKind::Plus,
            Lexeme::Minus => RawTokenKind::Minus,
            Lexeme::Star => RawTokenKind::Star,
            Lexeme::Slash => RawTokenKind::Divide,
            Lexeme::Percent => RawTokenKind::Percent,
            Lexeme::Bang => RawTokenKind::Not,
            Lexeme::Caret => RawTokenKind::Xor,
            Lexeme::Pipe => RawTokenKind::Or,
            Lexeme::Amp => RawTokenKind::And,
            Lexeme::Eq => RawTokenKind::Equal,
            Lexeme::Lt => RawTokenKind::Less,
            Lexeme::Gt => RawTokenKind::Greater,
            Lexeme::PlusPlus => RawTokenKind::PlusPlus,
            Lexeme::MinusMinus => RawTokenKind::MinusMinus,
            Lexeme::PlusEq => RawTokenKind::PlusEqual,
            Lexeme::MinusEq => RawTokenKind::MinusEqual,
            Lexeme::StarEq => RawTokenKind::StarEqual,
            Lexeme::SlashEq => RawTokenKind::DivideEqual,
            Lexeme::PercentEq => RawTokenKind::PercentEqual,
            Lexeme::CaretEq => RawTokenKind::XorEqual,
            Lexeme::NotEq => RawTokenKind::NotEqual,
            Lexeme::EqEq => RawTokenKind::EqualEqual,
            Lexeme::LtEq => RawTokenKind::LessEqual,
            Lexeme::GtEq => RawTokenKind::GreaterEqual,
            Lexeme::PipePipe => RawTokenKind::OrOr,
            Lexeme::AmpAmp => RawTokenKind::AndAnd,
            Lexeme::Dot => RawTokenKind::Dot,
            Lexeme::Comma => RawTokenKind::Comma,
            Lexeme::Colon => RawTokenKind::Colon,
            Lexeme::LParen => RawTokenKind::OpenParenthesis,
            Lexeme::RParen => RawTokenKind::CloseParenthesis,
            Lexeme::LBracket => RawTokenKind::OpenSqParenthesis,
            Lexeme::RBracket => RawTokenKind::CloseSqParenthesis,
            Lexeme::LBrace => RawTokenKind::OpenCurParenthesis,
            Lexeme::RBrace => RawTokenKind::CloseCurParenthesis,
        };
        (kind, slice)
    }
}

fn strip_quotes(slice: &str, quote: char) -> &str {
    slice
        .strip_prefix(quote)
        .and_then(|inner| inner.strip_suffix(quote))
        .unwrap_or(slice)
}

/// A token as scanned, borrowing its text from the source.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ScannedToken<'src> {
    pub kind: RawTokenKind,
    pub text: &'src str,
    /// 1-based line.
    pub line: usize,
    /// 0-based column, in characters.
    pub column: usize,
}

/// Incremental line/column tracker.
///
/// Offsets passed to [`locate`](Self::locate) must be non-decreasing char
/// boundaries.
struct LineTracker {
    line: usize,
    /// Byte offset everything before which has been accounted for.
    scanned: usize,
    /// Byte offset at which `column` was last measured.
    column_at: usize,
    column: usize,
}

impl LineTracker {
    fn new() -> Self {
        LineTracker {
            line: 1,
            scanned: 0,
            column_at: 0,
            column: 0,
        }
    }

    fn locate(&mut self, source: &str, offset: usize) -> (usize, usize) {
        let pending = &source.as_bytes()[self.scanned..offset];
        if let Some(last) = memchr::memrchr(b'\n', pending) {
            self.line += memchr::memchr_iter(b'\n', pending).count();
            self.column_at = self.scanned + last + 1;
            self.column = 0;
        }
        self.column += source[self.column_at..offset].chars().count();
        self.column_at = offset;
        self.scanned = offset;
        (self.line, self.column)
    }
}

/// Smallest char boundary at or after `index`.
fn ceil_char_boundary(source: &str, index: usize) -> usize {
    (index..source.len())
        .find(|&i| source.is_char_boundary(i))
        .unwrap_or(source.len())
}

/// Largest char boundary at or before `index`.
fn floor_char_boundary(source: &str, index: usize) -> usize {
    (0..=index.min(source.len()))
        .rev()
        .find(|&i| source.is_char_boundary(i))
        .unwrap_or(0)
}

/// Scan `source` into tokens.
///
/// Never fails: unrecognized text becomes [`RawTokenKind::Unknown`]. The
/// result always ends with a single [`RawTokenKind::Eoft`] with empty text,
/// located at the end of the source.
pub fn scan(source: &str) -> Vec<ScannedToken<'_>> {
    let mut lexer = Lexeme::lexer(source);
    // Offset of the lexer's input within `source`.
    let mut base = 0;
    let mut lines = LineTracker::new();
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        // Skipped bytes may stop partway into a character that is not
        // whitespace; that character belongs to this token.
        let start = floor_char_boundary(source, base + span.start);
        let end = base + span.end;

        // The automaton can stop inside a multi-byte character. Keep whatever
        // complete lexeme precedes it, and restart lexing on a boundary.
        let (kind, text, resume) = if source.is_char_boundary(end) {
            let text = &source[start..end];
            match result {
                Ok(lexeme) => {
                    let (kind, text) = lexeme.classify(text);
                    (kind, text, None)
                }
                Err(()) => (RawTokenKind::Unknown, text, None),
            }
        } else {
            let floor = floor_char_boundary(source, end);
            match result {
                Ok(lexeme) if floor > start => {
                    let (kind, text) = lexeme.classify(&source[start..floor]);
                    (kind, text, Some(floor))
                }
                _ => {
                    let ceil = ceil_char_boundary(source, end);
                    (RawTokenKind::Unknown, &source[start..ceil], Some(ceil))
                }
            }
        };

        let (line, column) = lines.locate(source, start);
        tokens.push(ScannedToken {
            kind,
            text,
            line,
            column,
        });

        if let Some(resume) = resume {
            base = resume;
            lexer = Lexeme::lexer(&source[resume..]);
        }
    }

    let (line, column) = lines.locate(source, source.len());
    tokens.push(ScannedToken {
        kind: RawTokenKind::Eoft,
        text: "",
        line,
        column,
    });
    tokens
}
