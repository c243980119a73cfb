//! The scanning automaton.
//!
//! Scanning is a deterministic finite automaton over characters. This module
//! holds its states and its transition function; walking a buffer is left to
//! [`Scanner`](crate::Scanner). Keeping the two apart lets every transition
//! be tested without a buffer.
//!
//! The transition function reads the current lookahead character and the one
//! after it. Only the decimal state looks at the second one, to decide
//! whether a `.` starts a fraction.
//!
//! The implementation is split by sub-automaton:
//! - `operator` - punctuation, operators, comments
//! - `number` - numeric literals
//! - `literal` - string, character and multi-line string literals

mod literal;
mod number;
mod operator;

use crate::chars::{is_ident_continue, is_ident_start, is_whitespace};
use crate::error::LexError;
use crate::token::Tag;

/// Radix of a prefixed integer literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
    /// `0b`
    Binary,
    /// `0o`
    Octal,
    /// `0x`
    Hex,
}

impl Radix {
    /// Numeric base.
    pub fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Hex => 16,
        }
    }

    /// Returns true if `c` is a digit of this radix.
    pub fn accepts(self, c: char) -> bool {
        crate::chars::is_digit_in_radix(c, self.base())
    }
}

/// A state of the scanning automaton.
///
/// Every call to [`Scanner::next_token`](crate::Scanner::next_token) starts
/// in [`State::Start`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum State {
    /// Between tokens
    Start,
    /// After `//`
    LineComment,

    /// After `=`
    Equal,
    /// After `!`
    Bang,
    /// After `|`
    Pipe,
    /// After `&`
    Ampersand,
    /// After `+`
    Plus,
    /// After `-`
    Minus,
    /// After `*`
    Asterisk,
    /// After `/`
    Slash,
    /// After `<`
    AngleLeft,
    /// After `<<`
    ShiftLeft,
    /// After `>`
    AngleRight,
    /// After `>>`
    ShiftRight,
    /// After `%`
    Percent,

    /// Inside a name
    Identifier,
    /// After `@`
    AtSign,
    /// Inside `@name`
    Builtin,

    /// After a leading `0`
    Zero,
    /// Inside the integer part of a decimal literal
    Decimal,
    /// After `_` in the integer part
    DecimalSeparator,
    /// After the `.` of a fraction
    FractionStart,
    /// Inside a fraction
    Fraction,
    /// After `_` in a fraction
    FractionSeparator,
    /// After `e` or `E`
    ExponentSign,
    /// After the exponent marker and its optional sign
    ExponentStart,
    /// Inside the exponent digits
    Exponent,
    /// After `_` in the exponent
    ExponentSeparator,
    /// After a radix prefix, before the first digit
    RadixStart(Radix),
    /// Inside the digits of a prefixed literal
    RadixDigits(Radix),
    /// After `_` in a prefixed literal
    RadixSeparator(Radix),

    /// Inside `"..."`
    StringBody,
    /// After `\` in a string
    StringEscape,
    /// After the opening `'`
    CharBody,
    /// After `\` in a character literal
    CharEscape,
    /// Inside `\x`, with the number of hex digits still required
    CharHexEscape(u8),
    /// After `\u`
    CharUnicodeOpen,
    /// Inside `\u{`, with the number of hex digits read so far
    CharUnicodeDigits(u8),
    /// After the single character, waiting for the closing `'`
    CharEnd,
    /// Inside a `%%` line
    Multiline,
    /// After `\r` in a `%%` line
    MultilineCarriageReturn,
    /// Skipping the rest of a rejected quoted literal up to its closing
    /// `quote`. `escaped` is set right after a `\`.
    QuotedRecovery {
        /// The delimiter that ends the literal
        quote: char,
        /// True if the previous character was an unescaped `\`
        escaped: bool,
        /// Why the literal was rejected
        error: LexError,
    },
    /// Skipping the rest of a rejected `%%` line
    MultilineRecovery(LexError),
}

/// What the scanner does with the lookahead character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Append it to the current lexeme.
    Consume,
    /// Leave it; the next state (or the next token) reads it again.
    Hold,
    /// Consume it as trivia. The lexeme restarts after it.
    Skip,
}

/// Result of one step of the automaton.
///
/// When `tag` is set the token is complete once `action` is applied and
/// `next` is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    /// State after the step
    pub next: State,
    /// Tag of the finished token, if this step finishes one
    pub tag: Option<Tag>,
    /// What happens to the lookahead
    pub action: Action,
}

impl Transition {
    /// Consume the lookahead and move to `next`.
    #[inline]
    pub const fn advance(next: State) -> Self {
        Self {
            next,
            tag: None,
            action: Action::Consume,
        }
    }

    /// Move to `next` without consuming the lookahead.
    #[inline]
    pub const fn hold(next: State) -> Self {
        Self {
            next,
            tag: None,
            action: Action::Hold,
        }
    }

    /// Discard the lookahead as trivia and move to `next`.
    #[inline]
    pub const fn skip(next: State) -> Self {
        Self {
            next,
            tag: None,
            action: Action::Skip,
        }
    }

    /// Finish the token before the lookahead.
    #[inline]
    pub const fn emit(tag: Tag) -> Self {
        Self {
            next: State::Start,
            tag: Some(tag),
            action: Action::Hold,
        }
    }

    /// Finish the token including the lookahead.
    #[inline]
    pub const fn emit_with(tag: Tag) -> Self {
        Self {
            next: State::Start,
            tag: Some(tag),
            action: Action::Consume,
        }
    }
}

/// The transition function.
///
/// `lookahead` is the character under the cursor and `following` the one
/// after it; both are `None` past the end of the buffer. The function is
/// total: every state handles the end of input, and every path from
/// [`State::Start`] either consumes a character or finishes a token within
/// a bounded number of steps.
///
/// # Example
///
/// ```
/// use emberc_lex::automaton::{step, Action, State};
/// use emberc_lex::Tag;
///
/// let t = step(State::Plus, Some('='), None);
/// assert_eq!(t.tag, Some(Tag::PlusEqual));
/// assert_eq!(t.action, Action::Consume);
///
/// let t = step(State::Plus, Some('x'), None);
/// assert_eq!(t.tag, Some(Tag::Plus));
/// assert_eq!(t.action, Action::Hold);
/// ```
pub fn step(state: State, lookahead: Option<char>, following: Option<char>) -> Transition {
    match state {
        State::Start => start(lookahead),
        State::LineComment => match lookahead {
            None | Some('\n') => Transition::hold(State::Start),
            Some(_) => Transition::skip(State::LineComment),
        },

        State::Equal
        | State::Bang
        | State::Pipe
        | State::Ampersand
        | State::Plus
        | State::Minus
        | State::Asterisk
        | State::Slash
        | State::AngleLeft
        | State::ShiftLeft
        | State::AngleRight
        | State::ShiftRight
        | State::Percent => operator::step(state, lookahead),

        State::Identifier => match lookahead {
            Some(c) if is_ident_continue(c) => Transition::advance(State::Identifier),
            _ => Transition::emit(Tag::Identifier),
        },
        State::AtSign => match lookahead {
            Some(c) if is_ident_start(c) => Transition::advance(State::Builtin),
            _ => Transition::emit(Tag::Invalid),
        },
        State::Builtin => match lookahead {
            Some(c) if is_ident_continue(c) => Transition::advance(State::Builtin),
            _ => Transition::emit(Tag::Builtin),
        },

        State::Zero
        | State::Decimal
        | State::DecimalSeparator
        | State::FractionStart
        | State::Fraction
        | State::FractionSeparator
        | State::ExponentSign
        | State::ExponentStart
        | State::Exponent
        | State::ExponentSeparator
        | State::RadixStart(_)
        | State::RadixDigits(_)
        | State::RadixSeparator(_) => number::step(state, lookahead, following),

        State::StringBody
        | State::StringEscape
        | State::CharBody
        | State::CharEscape
        | State::CharHexEscape(_)
        | State::CharUnicodeOpen
        | State::CharUnicodeDigits(_)
        | State::CharEnd
        | State::Multiline
        | State::MultilineCarriageReturn
        | State::QuotedRecovery { .. }
        | State::MultilineRecovery(_) => literal::step(state, lookahead),
    }
}

fn start(lookahead: Option<char>) -> Transition {
    let c = match lookahead {
        Some(c) => c,
        None => return Transition::emit(Tag::Eof),
    };
    match c {
        c if is_whitespace(c) => Transition::skip(State::Start),

        '(' => Transition::emit_with(Tag::LParen),
        ')' => Transition::emit_with(Tag::RParen),
        '[' => Transition::emit_with(Tag::LBracket),
        ']' => Transition::emit_with(Tag::RBracket),
        '{' => Transition::emit_with(Tag::LBrace),
        '}' => Transition::emit_with(Tag::RBrace),
        ',' => Transition::emit_with(Tag::Comma),
        ':' => Transition::emit_with(Tag::Colon),
        '.' => Transition::emit_with(Tag::Period),
        '~' => Transition::emit_with(Tag::Tilde),

        '=' => Transition::advance(State::Equal),
        '!' => Transition::advance(State::Bang),
        '|' => Transition::advance(State::Pipe),
        '&' => Transition::advance(State::Ampersand),
        '+' => Transition::advance(State::Plus),
        '-' => Transition::advance(State::Minus),
        '*' => Transition::advance(State::Asterisk),
        '/' => Transition::advance(State::Slash),
        '<' => Transition::advance(State::AngleLeft),
        '>' => Transition::advance(State::AngleRight),
        '%' => Transition::advance(State::Percent),

        '@' => Transition::advance(State::AtSign),
        '"' => Transition::advance(State::StringBody),
        '\'' => Transition::advance(State::CharBody),
        '0' => Transition::advance(State::Zero),
        '1'..='9' => Transition::advance(State::Decimal),
        c if is_ident_start(c) => Transition::advance(State::Identifier),

        _ => Transition::emit_with(Tag::Invalid),
    }
}

impl State {
    /// Explains why this state rejected `lookahead`.
    ///
    /// Only meaningful when [`step`] returned [`Tag::Invalid`] for the same
    /// state and lookahead.
    pub fn diagnose(self, lookahead: Option<char>) -> LexError {
        match self {
            State::AtSign => LexError::ExpectedBuiltinName,
            State::Percent => LexError::UnexpectedCharacter('%'),
            State::Zero
            | State::Decimal
            | State::DecimalSeparator
            | State::FractionStart
            | State::Fraction
            | State::FractionSeparator
            | State::ExponentSign
            | State::ExponentStart
            | State::Exponent
            | State::ExponentSeparator
            | State::RadixStart(_)
            | State::RadixDigits(_)
            | State::RadixSeparator(_) => number::diagnose(self, lookahead),
            State::StringBody
            | State::StringEscape
            | State::CharBody
            | State::CharEscape
            | State::CharHexEscape(_)
            | State::CharUnicodeOpen
            | State::CharUnicodeDigits(_)
            | State::CharEnd
            | State::Multiline
            | State::MultilineCarriageReturn
            | State::QuotedRecovery { .. }
            | State::MultilineRecovery(_) => literal::diagnose(self, lookahead),
            _ => match lookahead {
                Some(c) => LexError::UnexpectedCharacter(c),
                None => LexError::UnexpectedEof,
            },
        }
    }
}
