//! Numeric literal transitions.
//!
//! Handles:
//! - Decimal integers: `42`, `1_000`
//! - Prefixed integers: `0b1010`, `0o17`, `0xFF_FF`
//! - Floats: `3.14`, `2.5e-3`, `1e10`
//!
//! Separators must sit strictly between two digits of the literal's radix.

use super::{Radix, State, Transition};
use crate::chars::{is_alphabetic, is_decimal_digit, is_ident_continue};
use crate::error::LexError;
use crate::token::Tag;

/// Characters that would otherwise glue onto a broken literal.
#[inline]
fn sticky(c: char) -> bool {
    is_ident_continue(c) || is_alphabetic(c)
}

/// A required digit is missing. A sticky lookahead belongs to the invalid
/// token; anything else is left to start the next one.
#[inline]
fn reject(lookahead: Option<char>) -> Transition {
    match lookahead {
        Some(c) if sticky(c) => Transition::emit_with(Tag::Invalid),
        _ => Transition::emit(Tag::Invalid),
    }
}

/// The literal may end here unless a letter is glued onto it.
#[inline]
fn terminate(lookahead: Option<char>, tag: Tag) -> Transition {
    match lookahead {
        Some(c) if sticky(c) => Transition::emit_with(Tag::Invalid),
        _ => Transition::emit(tag),
    }
}

pub(super) fn step(state: State, lookahead: Option<char>, following: Option<char>) -> Transition {
    match state {
        State::Zero => match lookahead {
            Some('b') => Transition::advance(State::RadixStart(Radix::Binary)),
            Some('o') => Transition::advance(State::RadixStart(Radix::Octal)),
            Some('x') => Transition::advance(State::RadixStart(Radix::Hex)),
            Some(c) if is_decimal_digit(c) || matches!(c, '_' | '.' | 'e' | 'E') => {
                Transition::hold(State::Decimal)
            }
            _ => terminate(lookahead, Tag::IntegerLiteral),
        },
        State::Decimal => match lookahead {
            Some(c) if is_decimal_digit(c) => Transition::advance(State::Decimal),
            Some('_') => Transition::advance(State::DecimalSeparator),
            Some('.') if following.is_some_and(is_decimal_digit) => {
                Transition::advance(State::FractionStart)
            }
            Some('.') => Transition::emit(Tag::IntegerLiteral),
            Some('e' | 'E') => Transition::advance(State::ExponentSign),
            _ => terminate(lookahead, Tag::IntegerLiteral),
        },
        State::DecimalSeparator => match lookahead {
            Some(c) if is_decimal_digit(c) => Transition::advance(State::Decimal),
            _ => reject(lookahead),
        },

        State::FractionStart => match lookahead {
            Some(c) if is_decimal_digit(c) => Transition::advance(State::Fraction),
            _ => reject(lookahead),
        },
        State::Fraction => match lookahead {
            Some(c) if is_decimal_digit(c) => Transition::advance(State::Fraction),
            Some('_') => Transition::advance(State::FractionSeparator),
            Some('e' | 'E') => Transition::advance(State::ExponentSign),
            _ => terminate(lookahead, Tag::FloatLiteral),
        },
        State::FractionSeparator => match lookahead {
            Some(c) if is_decimal_digit(c) => Transition::advance(State::Fraction),
            _ => reject(lookahead),
        },

        State::ExponentSign => match lookahead {
            Some('+' | '-') => Transition::advance(State::ExponentStart),
            _ => Transition::hold(State::ExponentStart),
        },
        State::ExponentStart => match lookahead {
            Some(c) if is_decimal_digit(c) => Transition::advance(State::Exponent),
            _ => reject(lookahead),
        },
        State::Exponent => match lookahead {
            Some(c) if is_decimal_digit(c) => Transition::advance(State::Exponent),
            Some('_') => Transition::advance(State::ExponentSeparator),
            _ => terminate(lookahead, Tag::FloatLiteral),
        },
        State::ExponentSeparator => match lookahead {
            Some(c) if is_decimal_digit(c) => Transition::advance(State::Exponent),
            _ => reject(lookahead),
        },

        State::RadixStart(radix) => match lookahead {
            Some(c) if radix.accepts(c) => Transition::advance(State::RadixDigits(radix)),
            _ => reject(lookahead),
        },
        State::RadixDigits(radix) => match lookahead {
            Some(c) if radix.accepts(c) => Transition::advance(State::RadixDigits(radix)),
            Some('_') => Transition::advance(State::RadixSeparator(radix)),
            _ => terminate(lookahead, Tag::IntegerLiteral),
        },
        State::RadixSeparator(radix) => match lookahead {
            Some(c) if radix.accepts(c) => Transition::advance(State::RadixDigits(radix)),
            _ => reject(lookahead),
        },

        _ => unreachable!("not a numeric state: {:?}", state),
    }
}

pub(super) fn diagnose(state: State, lookahead: Option<char>) -> LexError {
    match (state, lookahead) {
        (
            State::DecimalSeparator
            | State::FractionSeparator
            | State::ExponentSeparator
            | State::RadixSeparator(_),
            _,
        ) => LexError::MisplacedSeparator,
        (State::ExponentSign | State::ExponentStart, _) => LexError::MissingExponentDigits,
        (State::RadixStart(_), Some('_')) => LexError::MisplacedSeparator,
        (State::RadixStart(radix), Some(c)) if sticky(c) => LexError::InvalidDigit {
            digit: c,
            radix: radix.base(),
        },
        (State::RadixStart(radix), _) => LexError::MissingDigits(radix.base()),
        (State::RadixDigits(radix), Some(c)) => LexError::InvalidDigit {
            digit: c,
            radix: radix.base(),
        },
        (_, Some(c)) => LexError::InvalidSuffix(c),
        (_, None) => LexError::UnexpectedEof,
    }
}
