//! Token definitions and the keyword table.
//!
//! A [`Token`] carries no text of its own: it is a [`Tag`] plus the inclusive
//! [`Span`] of its lexeme and the line it starts on. The parser slices the
//! source buffer when it needs the text.

use std::fmt;
use std::sync::OnceLock;

use emberc_util::Span;
use rustc_hash::FxHashMap;

/// Classification of a token.
///
/// The set is closed and the variants are mutually exclusive. Every reserved
/// word has its own variant; a lexeme spelled like a reserved word is never
/// tagged [`Tag::Identifier`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Tag {
    // Punctuation
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `.`
    Period,
    /// `~`
    Tilde,

    // Operators
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `=>`
    FatArrow,
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `|`
    Pipe,
    /// `|=`
    PipeEqual,
    /// `&`
    Ampersand,
    /// `&=`
    AmpersandEqual,
    /// `+`
    Plus,
    /// `+=`
    PlusEqual,
    /// `++`
    PlusPlus,
    /// `-`
    Minus,
    /// `-=`
    MinusEqual,
    /// `--`
    MinusMinus,
    /// `->`
    Arrow,
    /// `*`
    Asterisk,
    /// `*=`
    AsteriskEqual,
    /// `/`
    Slash,
    /// `/=`
    SlashEqual,
    /// `<`
    AngleLeft,
    /// `<=`
    AngleLeftEqual,
    /// `<<`
    ShiftLeft,
    /// `<<=`
    ShiftLeftEqual,
    /// `>`
    AngleRight,
    /// `>=`
    AngleRightEqual,
    /// `>>`
    ShiftRight,
    /// `>>=`
    ShiftRightEqual,

    // Literals
    /// `"..."`
    StringLiteral,
    /// `'c'`
    CharLiteral,
    /// `%%...` through the end of its line
    MultilineStringLiteral,
    /// `42`, `0x2A`, `0o52`, `0b101010`
    IntegerLiteral,
    /// `4.2`, `42e-1`
    FloatLiteral,

    // Structural markers
    /// A name that is not a reserved word
    Identifier,
    /// `@name`
    Builtin,
    /// End of input
    Eof,
    /// Malformed input
    Invalid,

    // Keywords
    /// `and`
    And,
    /// `break`
    Break,
    /// `const`
    Const,
    /// `continue`
    Continue,
    /// `else`
    Else,
    /// `false`
    False,
    /// `fn`
    Fn,
    /// `for`
    For,
    /// `if`
    If,
    /// `in`
    In,
    /// `let`
    Let,
    /// `nil`
    Nil,
    /// `not`
    Not,
    /// `or`
    Or,
    /// `return`
    Return,
    /// `then`
    Then,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,
}

/// Every reserved word and the tag it is reclassified to.
pub const KEYWORDS: [(&str, Tag); 19] = [
    ("and", Tag::And),
    ("break", Tag::Break),
    ("const", Tag::Const),
    ("continue", Tag::Continue),
    ("else", Tag::Else),
    ("false", Tag::False),
    ("fn", Tag::Fn),
    ("for", Tag::For),
    ("if", Tag::If),
    ("in", Tag::In),
    ("let", Tag::Let),
    ("nil", Tag::Nil),
    ("not", Tag::Not),
    ("or", Tag::Or),
    ("return", Tag::Return),
    ("then", Tag::Then),
    ("true", Tag::True),
    ("var", Tag::Var),
    ("while", Tag::While),
];

static KEYWORD_TABLE: OnceLock<FxHashMap<&'static str, Tag>> = OnceLock::new();

/// Looks up an identifier-shaped lexeme in the keyword table.
///
/// Only exact matches are reserved; keywords are case-sensitive.
///
/// # Example
///
/// ```
/// use emberc_lex::token::{keyword, Tag};
///
/// assert_eq!(keyword("while"), Some(Tag::While));
/// assert_eq!(keyword("While"), None);
/// assert_eq!(keyword("whiles"), None);
/// ```
pub fn keyword(text: &str) -> Option<Tag> {
    KEYWORD_TABLE
        .get_or_init(|| KEYWORDS.iter().copied().collect())
        .get(text)
        .copied()
}

impl Tag {
    /// The fixed spelling of punctuation, operators and keywords.
    ///
    /// Returns `None` for tags whose lexeme varies (literals, names) and for
    /// the structural markers.
    pub fn lexeme(self) -> Option<&'static str> {
        use Tag::*;
        let text = match self {
            LParen => "(",
            RParen => ")",
            LBracket => "[",
            RBracket => "]",
            LBrace => "{",
            RBrace => "}",
            Comma => ",",
            Colon => ":",
            Period => ".",
            Tilde => "~",
            Equal => "=",
            EqualEqual => "==",
            FatArrow => "=>",
            Bang => "!",
            BangEqual => "!=",
            Pipe => "|",
            PipeEqual => "|=",
            Ampersand => "&",
            AmpersandEqual => "&=",
            Plus => "+",
            PlusEqual => "+=",
            PlusPlus => "++",
            Minus => "-",
            MinusEqual => "-=",
            MinusMinus => "--",
            Arrow => "->",
            Asterisk => "*",
            AsteriskEqual => "*=",
            Slash => "/",
            SlashEqual => "/=",
            AngleLeft => "<",
            AngleLeftEqual => "<=",
            ShiftLeft => "<<",
            ShiftLeftEqual => "<<=",
            AngleRight => ">",
            AngleRightEqual => ">=",
            ShiftRight => ">>",
            ShiftRightEqual => ">>=",
            And => "and",
            Break => "break",
            Const => "const",
            Continue => "continue",
            Else => "else",
            False => "false",
            Fn => "fn",
            For => "for",
            If => "if",
            In => "in",
            Let => "let",
            Nil => "nil",
            Not => "not",
            Or => "or",
            Return => "return",
            Then => "then",
            True => "true",
            Var => "var",
            While => "while",
            StringLiteral | CharLiteral | MultilineStringLiteral | IntegerLiteral
            | FloatLiteral | Identifier | Builtin | Eof | Invalid => return None,
        };
        Some(text)
    }

    /// Returns true for reserved-word tags.
    pub fn is_keyword(self) -> bool {
        self >= Tag::And
    }

    /// Returns true for the five literal categories.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Tag::StringLiteral
                | Tag::CharLiteral
                | Tag::MultilineStringLiteral
                | Tag::IntegerLiteral
                | Tag::FloatLiteral
        )
    }

    /// A short human-readable description, used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            Tag::StringLiteral => "string literal",
            Tag::CharLiteral => "character literal",
            Tag::MultilineStringLiteral => "multi-line string literal",
            Tag::IntegerLiteral => "integer literal",
            Tag::FloatLiteral => "float literal",
            Tag::Identifier => "identifier",
            Tag::Builtin => "builtin",
            Tag::Eof => "end of input",
            Tag::Invalid => "invalid token",
            tag => tag.lexeme().unwrap_or("token"),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lexeme() {
            Some(text) => write!(f, "`{}`", text),
            None => f.write_str(self.describe()),
        }
    }
}

/// A classified lexeme.
///
/// # Example
///
/// ```
/// use emberc_lex::{Scanner, Tag};
/// use emberc_util::Span;
///
/// let mut scanner = Scanner::new("x");
/// let token = scanner.next_token();
/// assert_eq!(token.tag, Tag::Identifier);
/// assert_eq!(token.span, Span::new(0, 0));
/// assert_eq!(token.line, 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// What the lexeme is.
    pub tag: Tag,
    /// Inclusive offsets of the lexeme; `len..=len` for end of input.
    pub span: Span,
    /// 1-based line of the lexeme's first character.
    pub line: u32,
}

static_assertions::assert_impl_all!(Token: Send, Sync, Copy);
static_assertions::assert_eq_size!(Tag, u8);

impl Token {
    /// Creates a token.
    pub const fn new(tag: Tag, span: Span, line: u32) -> Self {
        Self { tag, span, line }
    }

    /// Returns true for the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.tag == Tag::Eof
    }

    /// Returns true for tokens produced from malformed input.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        self.tag == Tag::Invalid
    }

    /// Number of characters in the lexeme.
    ///
    /// Unlike `span.len()` this is 0 for [`Tag::Eof`], whose point span sits
    /// past the last character.
    #[inline]
    pub fn lexeme_len(&self) -> usize {
        if self.is_eof() {
            0
        } else {
            self.span.len()
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {} (line {})", self.tag, self.span, self.line)
    }
}
