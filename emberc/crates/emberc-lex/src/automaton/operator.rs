//! Operator and punctuation transitions.
//!
//! Handles: `=`, `==`, `=>`, `!`, `!=`, `|`, `|=`, `&`, `&=`, `+`, `+=`,
//! `++`, `-`, `-=`, `--`, `->`, `*`, `*=`, `/`, `/=`, `<`, `<=`, `<<`,
//! `<<=`, `>`, `>=`, `>>`, `>>=`, plus `//` comments and the `%%` prefix.

use super::{State, Transition};
use crate::token::Tag;

/// `bare` followed by `=` becomes `compound`; anything else ends `bare`
/// and is left for the next token.
#[inline]
fn equal_suffix(lookahead: Option<char>, bare: Tag, compound: Tag) -> Transition {
    if lookahead == Some('=') {
        Transition::emit_with(compound)
    } else {
        Transition::emit(bare)
    }
}

pub(super) fn step(state: State, lookahead: Option<char>) -> Transition {
    match (state, lookahead) {
        (State::Equal, Some('>')) => Transition::emit_with(Tag::FatArrow),
        (State::Equal, _) => equal_suffix(lookahead, Tag::Equal, Tag::EqualEqual),

        (State::Bang, _) => equal_suffix(lookahead, Tag::Bang, Tag::BangEqual),
        (State::Pipe, _) => equal_suffix(lookahead, Tag::Pipe, Tag::PipeEqual),
        (State::Ampersand, _) => equal_suffix(lookahead, Tag::Ampersand, Tag::AmpersandEqual),
        (State::Asterisk, _) => equal_suffix(lookahead, Tag::Asterisk, Tag::AsteriskEqual),

        (State::Plus, Some('+')) => Transition::emit_with(Tag::PlusPlus),
        (State::Plus, _) => equal_suffix(lookahead, Tag::Plus, Tag::PlusEqual),

        (State::Minus, Some('-')) => Transition::emit_with(Tag::MinusMinus),
        (State::Minus, Some('>')) => Transition::emit_with(Tag::Arrow),
        (State::Minus, _) => equal_suffix(lookahead, Tag::Minus, Tag::MinusEqual),

        // The second slash is trivia too, so the comment never becomes a lexeme.
        (State::Slash, Some('/')) => Transition::skip(State::LineComment),
        (State::Slash, _) => equal_suffix(lookahead, Tag::Slash, Tag::SlashEqual),

        (State::AngleLeft, Some('<')) => Transition::advance(State::ShiftLeft),
        (State::AngleLeft, _) => equal_suffix(lookahead, Tag::AngleLeft, Tag::AngleLeftEqual),
        (State::ShiftLeft, _) => equal_suffix(lookahead, Tag::ShiftLeft, Tag::ShiftLeftEqual),

        (State::AngleRight, Some('>')) => Transition::advance(State::ShiftRight),
        (State::AngleRight, _) => equal_suffix(lookahead, Tag::AngleRight, Tag::AngleRightEqual),
        (State::ShiftRight, _) => equal_suffix(lookahead, Tag::ShiftRight, Tag::ShiftRightEqual),

        (State::Percent, Some('%')) => Transition::advance(State::Multiline),
        (State::Percent, _) => Transition::emit(Tag::Invalid),

        _ => unreachable!("not an operator state: {:?}", state),
    }
}
