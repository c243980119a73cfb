//! String, character and multi-line string transitions.
//!
//! All three literal kinds end at the line: a raw newline or the end of
//! input before the closing delimiter makes the token invalid and is left
//! for the next token. Control characters other than tab are rejected
//! inside every literal.
//!
//! A rejected literal still runs to its delimiter. The recovery states
//! consume the rest of it (through the closing quote, or through the
//! newline of a `%%` line) so that one malformed literal is one invalid
//! token and its tail is never rescanned as code.

use super::{State, Transition};
use crate::chars::{is_disallowed_in_literal, is_hex_digit};
use crate::error::LexError;
use crate::token::Tag;

/// Maximum hex digits in a `\u{...}` escape.
const MAX_UNICODE_DIGITS: u8 = 6;

/// Rejects a quoted literal at `lookahead`. A closing `quote` ends the
/// invalid token, a line end stays outside it, anything else starts
/// skipping towards the closing quote.
#[inline]
fn reject_quoted(quote: char, lookahead: Option<char>, error: LexError) -> Transition {
    match lookahead {
        None | Some('\n') => Transition::emit(Tag::Invalid),
        Some(c) if c == quote => Transition::emit_with(Tag::Invalid),
        Some(c) => Transition::advance(State::QuotedRecovery {
            quote,
            escaped: c == '\\',
            error,
        }),
    }
}

/// Rejects a `%%` line at `lookahead`. The invalid token runs through the
/// newline, like a well-formed line would.
#[inline]
fn reject_line(lookahead: Option<char>, error: LexError) -> Transition {
    match lookahead {
        None => Transition::emit(Tag::Invalid),
        Some('\n') => Transition::emit_with(Tag::Invalid),
        Some(_) => Transition::advance(State::MultilineRecovery(error)),
    }
}

pub(super) fn step(state: State, lookahead: Option<char>) -> Transition {
    let reject_string = || reject_quoted('"', lookahead, diagnose(state, lookahead));
    let reject_char = || reject_quoted('\'', lookahead, diagnose(state, lookahead));
    match state {
        State::StringBody => match lookahead {
            None | Some('\n') => Transition::emit(Tag::Invalid),
            Some('"') => Transition::emit_with(Tag::StringLiteral),
            Some('\\') => Transition::advance(State::StringEscape),
            Some(c) if is_disallowed_in_literal(c) => reject_string(),
            Some(_) => Transition::advance(State::StringBody),
        },
        State::StringEscape => match lookahead {
            Some(c) if c != '\n' && !is_disallowed_in_literal(c) => {
                Transition::advance(State::StringBody)
            }
            _ => reject_string(),
        },

        State::CharBody => match lookahead {
            None | Some('\n') => Transition::emit(Tag::Invalid),
            Some('\'') => Transition::emit_with(Tag::Invalid),
            Some('\\') => Transition::advance(State::CharEscape),
            Some(c) if is_disallowed_in_literal(c) => reject_char(),
            Some(_) => Transition::advance(State::CharEnd),
        },
        State::CharEscape => match lookahead {
            Some('x') => Transition::advance(State::CharHexEscape(2)),
            Some('u') => Transition::advance(State::CharUnicodeOpen),
            Some(c) if c != '\n' && !is_disallowed_in_literal(c) => {
                Transition::advance(State::CharEnd)
            }
            _ => reject_char(),
        },
        State::CharHexEscape(remaining) => match lookahead {
            Some(c) if is_hex_digit(c) && remaining > 1 => {
                Transition::advance(State::CharHexEscape(remaining - 1))
            }
            Some(c) if is_hex_digit(c) => Transition::advance(State::CharEnd),
            _ => reject_char(),
        },
        State::CharUnicodeOpen => match lookahead {
            Some('{') => Transition::advance(State::CharUnicodeDigits(0)),
            _ => reject_char(),
        },
        State::CharUnicodeDigits(count) => match lookahead {
            Some(c) if is_hex_digit(c) && count < MAX_UNICODE_DIGITS => {
                Transition::advance(State::CharUnicodeDigits(count + 1))
            }
            Some('}') if count > 0 => Transition::advance(State::CharEnd),
            _ => reject_char(),
        },
        State::CharEnd => match lookahead {
            Some('\'') => Transition::emit_with(Tag::CharLiteral),
            _ => reject_char(),
        },

        State::QuotedRecovery {
            quote,
            escaped,
            error,
        } => match lookahead {
            None | Some('\n') => Transition::emit(Tag::Invalid),
            Some(c) if c == quote && !escaped => Transition::emit_with(Tag::Invalid),
            Some(c) => Transition::advance(State::QuotedRecovery {
                quote,
                escaped: c == '\\' && !escaped,
                error,
            }),
        },

        State::Multiline => match lookahead {
            Some('\n') => Transition::emit_with(Tag::MultilineStringLiteral),
            Some('\r') => Transition::advance(State::MultilineCarriageReturn),
            None => Transition::emit(Tag::Invalid),
            Some(c) if is_disallowed_in_literal(c) => {
                reject_line(lookahead, LexError::ControlCharacter(c))
            }
            Some(_) => Transition::advance(State::Multiline),
        },
        State::MultilineCarriageReturn => match lookahead {
            Some('\n') => Transition::emit_with(Tag::MultilineStringLiteral),
            _ => reject_line(lookahead, LexError::LoneCarriageReturn),
        },
        State::MultilineRecovery(error) => reject_line(lookahead, error),

        _ => unreachable!("not a literal state: {:?}", state),
    }
}

pub(super) fn diagnose(state: State, lookahead: Option<char>) -> LexError {
    let control = lookahead.filter(|&c| c != '\n' && is_disallowed_in_literal(c));
    match state {
        State::StringBody | State::StringEscape => match control {
            Some(c) => LexError::ControlCharacter(c),
            None => LexError::UnterminatedString,
        },
        State::CharBody if lookahead == Some('\'') => LexError::EmptyChar,
        State::CharBody | State::CharEscape => match control {
            Some(c) => LexError::ControlCharacter(c),
            None => LexError::UnterminatedChar,
        },
        State::CharHexEscape(_) | State::CharUnicodeOpen | State::CharUnicodeDigits(_) => {
            match lookahead {
                None | Some('\n') => LexError::UnterminatedChar,
                Some(_) => LexError::InvalidEscape,
            }
        }
        State::CharEnd => match lookahead {
            None | Some('\n') => LexError::UnterminatedChar,
            Some(_) => LexError::OverlongChar,
        },
        State::QuotedRecovery { error, .. } | State::MultilineRecovery(error) => error,
        State::Multiline => match control {
            Some(c) => LexError::ControlCharacter(c),
            None => LexError::UnterminatedMultilineString,
        },
        State::MultilineCarriageReturn => LexError::LoneCarriageReturn,
        _ => LexError::UnexpectedEof,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_closes_on_quote() {
        assert_eq!(
            step(State::StringBody, Some('"')),
            Transition::emit_with(Tag::StringLiteral)
        );
        assert_eq!(
            step(State::StringBody, Some('é')),
            Transition::advance(State::StringBody)
        );
        assert_eq!(
            step(State::StringBody, Some('\t')),
            Transition::advance(State::StringBody)
        );
    }

    #[test]
    fn test_string_escape_takes_any_character() {
        for c in ['"', '\\', 'n', 'q', '0'] {
            assert_eq!(
                step(State::StringEscape, Some(c)),
                Transition::advance(State::StringBody)
            );
        }
        assert_eq!(step(State::StringEscape, Some('\n')), Transition::emit(Tag::Invalid));
    }

    #[test]
    fn test_string_stops_at_line_end() {
        assert_eq!(step(State::StringBody, Some('\n')), Transition::emit(Tag::Invalid));
        assert_eq!(step(State::StringBody, None), Transition::emit(Tag::Invalid));
        assert_eq!(
            State::StringBody.diagnose(Some('\n')),
            LexError::UnterminatedString
        );
    }

    #[test]
    fn test_control_characters_rejected() {
        assert_eq!(
            step(State::StringBody, Some('\u{7}')),
            Transition::advance(State::QuotedRecovery {
                quote: '"',
                escaped: false,
                error: LexError::ControlCharacter('\u{7}'),
            })
        );
        assert_eq!(
            State::StringBody.diagnose(Some('\u{7}')),
            LexError::ControlCharacter('\u{7}')
        );
        assert_eq!(
            step(State::CharBody, Some('\u{1b}')),
            Transition::advance(State::QuotedRecovery {
                quote: '\'',
                escaped: false,
                error: LexError::ControlCharacter('\u{1b}'),
            })
        );
        assert_eq!(
            step(State::Multiline, Some('\u{7f}')),
            Transition::advance(State::MultilineRecovery(LexError::ControlCharacter(
                '\u{7f}'
            )))
        );
    }

    #[test]
    fn test_char_literal_shapes() {
        assert_eq!(step(State::CharBody, Some('c')), Transition::advance(State::CharEnd));
        assert_eq!(
            step(State::CharEnd, Some('\'')),
            Transition::emit_with(Tag::CharLiteral)
        );
        assert_eq!(
            step(State::CharEnd, Some('d')),
            Transition::advance(State::QuotedRecovery {
                quote: '\'',
                escaped: false,
                error: LexError::OverlongChar,
            })
        );
        assert_eq!(State::CharEnd.diagnose(Some('d')), LexError::OverlongChar);
        assert_eq!(step(State::CharEnd, Some('\n')), Transition::emit(Tag::Invalid));
        assert_eq!(step(State::CharBody, Some('\'')), Transition::emit_with(Tag::Invalid));
        assert_eq!(State::CharBody.diagnose(Some('\'')), LexError::EmptyChar);
    }

    #[test]
    fn test_hex_escape_needs_two_digits() {
        assert_eq!(
            step(State::CharEscape, Some('x')),
            Transition::advance(State::CharHexEscape(2))
        );
        assert_eq!(
            step(State::CharHexEscape(2), Some('4')),
            Transition::advance(State::CharHexEscape(1))
        );
        assert_eq!(
            step(State::CharHexEscape(1), Some('f')),
            Transition::advance(State::CharEnd)
        );
        assert_eq!(
            step(State::CharHexEscape(1), Some('\'')),
            Transition::emit_with(Tag::Invalid)
        );
        assert_eq!(
            State::CharHexEscape(1).diagnose(Some('\'')),
            LexError::InvalidEscape
        );
    }

    #[test]
    fn test_unicode_escape_digit_count() {
        let bad_escape = Transition::advance(State::QuotedRecovery {
            quote: '\'',
            escaped: false,
            error: LexError::InvalidEscape,
        });
        assert_eq!(step(State::CharUnicodeDigits(0), Some('}')), bad_escape);
        assert_eq!(
            step(State::CharUnicodeDigits(1), Some('}')),
            Transition::advance(State::CharEnd)
        );
        assert_eq!(
            step(State::CharUnicodeDigits(5), Some('A')),
            Transition::advance(State::CharUnicodeDigits(6))
        );
        assert_eq!(step(State::CharUnicodeDigits(6), Some('A')), bad_escape);
        assert_eq!(step(State::CharUnicodeOpen, Some('1')), bad_escape);
    }

    #[test]
    fn test_multiline_ends_with_newline() {
        assert_eq!(
            step(State::Multiline, Some('\n')),
            Transition::emit_with(Tag::MultilineStringLiteral)
        );
        assert_eq!(
            step(State::Multiline, Some('"')),
            Transition::advance(State::Multiline)
        );
        assert_eq!(step(State::Multiline, None), Transition::emit(Tag::Invalid));
        assert_eq!(
            State::Multiline.diagnose(None),
            LexError::UnterminatedMultilineString
        );
    }

    #[test]
    fn test_multiline_carriage_return() {
        assert_eq!(
            step(State::Multiline, Some('\r')),
            Transition::advance(State::MultilineCarriageReturn)
        );
        assert_eq!(
            step(State::MultilineCarriageReturn, Some('\n')),
            Transition::emit_with(Tag::MultilineStringLiteral)
        );
        assert_eq!(
            step(State::MultilineCarriageReturn, Some('x')),
            Transition::advance(State::MultilineRecovery(LexError::LoneCarriageReturn))
        );
        assert_eq!(
            step(State::MultilineCarriageReturn, None),
            Transition::emit(Tag::Invalid)
        );
        assert_eq!(
            State::MultilineCarriageReturn.diagnose(None),
            LexError::LoneCarriageReturn
        );
    }

    #[test]
    fn test_quoted_recovery_runs_to_closing_quote() {
        let skipping = State::QuotedRecovery {
            quote: '\'',
            escaped: false,
            error: LexError::OverlongChar,
        };
        assert_eq!(step(skipping, Some('b')), Transition::advance(skipping));
        assert_eq!(step(skipping, Some('"')), Transition::advance(skipping));
        assert_eq!(step(skipping, Some('\'')), Transition::emit_with(Tag::Invalid));
        assert_eq!(step(skipping, Some('\n')), Transition::emit(Tag::Invalid));
        assert_eq!(step(skipping, None), Transition::emit(Tag::Invalid));
        assert_eq!(skipping.diagnose(Some('\'')), LexError::OverlongChar);
    }

    #[test]
    fn test_quoted_recovery_honors_escapes() {
        let skipping = State::QuotedRecovery {
            quote: '"',
            escaped: false,
            error: LexError::ControlCharacter('\u{7}'),
        };
        let escaped = State::QuotedRecovery {
            quote: '"',
            escaped: true,
            error: LexError::ControlCharacter('\u{7}'),
        };
        assert_eq!(step(skipping, Some('\\')), Transition::advance(escaped));
        assert_eq!(step(escaped, Some('"')), Transition::advance(skipping));
        assert_eq!(step(escaped, Some('\\')), Transition::advance(skipping));
        assert_eq!(step(escaped, Some('\n')), Transition::emit(Tag::Invalid));
    }

    #[test]
    fn test_bad_escape_at_closing_quote_ends_token() {
        assert_eq!(
            step(State::CharHexEscape(1), Some('\'')),
            Transition::emit_with(Tag::Invalid)
        );
        assert_eq!(
            step(State::CharEnd, Some('\\')),
            Transition::advance(State::QuotedRecovery {
                quote: '\'',
                escaped: true,
                error: LexError::OverlongChar,
            })
        );
    }

    #[test]
    fn test_multiline_recovery_runs_through_newline() {
        let skipping = State::MultilineRecovery(LexError::LoneCarriageReturn);
        assert_eq!(step(skipping, Some('b')), Transition::advance(skipping));
        assert_eq!(step(skipping, Some('\r')), Transition::advance(skipping));
        assert_eq!(step(skipping, Some('\n')), Transition::emit_with(Tag::Invalid));
        assert_eq!(step(skipping, None), Transition::emit(Tag::Invalid));
        assert_eq!(skipping.diagnose(None), LexError::LoneCarriageReturn);
    }
}
