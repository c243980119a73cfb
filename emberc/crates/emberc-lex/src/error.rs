//! Reasons a lexeme is classified as [`Tag::Invalid`](crate::Tag::Invalid).
//!
//! The scanner never fails: malformed input still produces a token. These
//! errors travel alongside the invalid token as diagnostics.

use emberc_util::DiagnosticCode;
use thiserror::Error;

/// Why the scanner rejected a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LexError {
    /// A character that cannot start any token
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),

    /// Input ended where a character was required
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// `@` not followed by a letter or underscore
    #[error("expected a builtin name after '@'")]
    ExpectedBuiltinName,

    /// String literal missing its closing quote on the same line
    #[error("unterminated string literal")]
    UnterminatedString,

    /// Character literal missing its closing quote on the same line
    #[error("unterminated character literal")]
    UnterminatedChar,

    /// Multi-line string line not ended by a newline
    #[error("unterminated multi-line string literal")]
    UnterminatedMultilineString,

    /// `''`
    #[error("empty character literal")]
    EmptyChar,

    /// More than one character between single quotes
    #[error("character literal must contain exactly one character")]
    OverlongChar,

    /// Malformed `\x` or `\u{...}` escape in a character literal
    #[error("invalid escape sequence in character literal")]
    InvalidEscape,

    /// Control character other than tab inside a literal
    #[error("control character {} is not allowed in a literal", codepoint(.0))]
    ControlCharacter(char),

    /// Carriage return not followed by a line feed in a multi-line string
    #[error("carriage return must be followed by a line feed")]
    LoneCarriageReturn,

    /// `_` not placed strictly between two digits
    #[error("digit separator must sit between two digits")]
    MisplacedSeparator,

    /// Character that is not a digit of the literal's radix
    #[error("invalid digit {digit:?} in base-{radix} literal")]
    InvalidDigit {
        /// The offending character
        digit: char,
        /// Radix of the literal
        radix: u32,
    },

    /// Radix prefix with no digits after it
    #[error("missing digits after base-{0} prefix")]
    MissingDigits(u32),

    /// `e`/`E` (and optional sign) with no digits after it
    #[error("missing digits in float exponent")]
    MissingExponentDigits,

    /// Letter directly after a decimal or float literal
    #[error("invalid suffix {0:?} on numeric literal")]
    InvalidSuffix(char),
}

fn codepoint(c: &char) -> String {
    format!("U+{:04X}", *c as u32)
}

impl LexError {
    /// Diagnostic code reported for this error.
    pub fn code(self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedCharacter(_) | LexError::UnexpectedEof => {
                DiagnosticCode::E_LEXER_UNEXPECTED_CHAR
            }
            LexError::ExpectedBuiltinName => DiagnosticCode::E_LEXER_INVALID_BUILTIN,
            LexError::UnterminatedString
            | LexError::UnterminatedChar
            | LexError::UnterminatedMultilineString
            | LexError::LoneCarriageReturn => DiagnosticCode::E_LEXER_UNTERMINATED_LITERAL,
            LexError::EmptyChar | LexError::OverlongChar => {
                DiagnosticCode::E_LEXER_INVALID_CHAR_LITERAL
            }
            LexError::InvalidEscape => DiagnosticCode::E_LEXER_INVALID_ESCAPE,
            LexError::ControlCharacter(_) => DiagnosticCode::E_LEXER_CONTROL_CHAR,
            LexError::MisplacedSeparator
            | LexError::InvalidDigit { .. }
            | LexError::MissingDigits(_)
            | LexError::MissingExponentDigits
            | LexError::InvalidSuffix(_) => DiagnosticCode::E_LEXER_INVALID_NUMBER,
        }
    }

    /// A one-line suggestion attached to the diagnostic, if there is one.
    pub fn help(self) -> Option<&'static str> {
        match self {
            LexError::UnterminatedString => Some("add a closing '\"' before the end of the line"),
            LexError::UnterminatedChar | LexError::OverlongChar => {
                Some("a character literal holds one character, e.g. 'a' or '\\n'")
            }
            LexError::UnterminatedMultilineString => {
                Some("end the multi-line string line with a newline")
            }
            LexError::MisplacedSeparator => Some("remove the '_' or add a digit after it"),
            LexError::ControlCharacter(_) => Some("use an escape sequence instead"),
            _ => None,
        }
    }
}
