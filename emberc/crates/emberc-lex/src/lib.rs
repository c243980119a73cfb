//! emberc-lex - Lexical Scanner for the Ember Expression Language
//!
//! This crate turns source text into a stream of classified tokens for the
//! parser. Scanning is on demand: each call to [`Scanner::next_token`]
//! produces exactly one token.
//!
//! # Example Usage
//!
//! ```
//! use emberc_lex::{Scanner, Tag};
//!
//! let mut scanner = Scanner::new("let x = 0x8_57F3");
//! let token = scanner.next_token();
//! assert_eq!(token.tag, Tag::Let);
//!
//! let rest: Vec<Tag> = scanner.map(|t| t.tag).collect();
//! assert_eq!(rest, [Tag::Identifier, Tag::Equal, Tag::IntegerLiteral]);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - [`Tag`], [`Token`] and the keyword table
//! - [`scanner`] - The [`Scanner`] driving the automaton over a buffer
//! - [`automaton`] - States and the transition function
//! - [`source_buffer`] - Randomly indexable source characters
//! - [`chars`] - Character classes
//! - [`config`] - [`ScanConfig`] and its TOML loading
//! - [`error`] - [`LexError`], the reasons behind invalid tokens
//!
//! # Tokens
//!
//! A token is a tag, the inclusive span of its lexeme and the line it starts
//! on. Whitespace and `//` comments are trivia and never become tokens.
//!
//! ## Keywords
//!
//! `and`, `break`, `const`, `continue`, `else`, `false`, `fn`, `for`, `if`,
//! `in`, `let`, `nil`, `not`, `or`, `return`, `then`, `true`, `var`, `while`
//!
//! ## Literals
//!
//! - Integers: `42`, `1_000`, `0b1010`, `0o17`, `0xFF`
//! - Floats: `3.14`, `2.5e-3`, `1e10`
//! - Strings: `"hello\n"`
//! - Characters: `'a'`, `'\n'`, `'\x41'`, `'\u{1F600}'`
//! - Multi-line strings: `%%` through the end of the line
//!
//! ## Builtins
//!
//! `@` followed by a name, e.g. `@import`.
//!
//! # Errors
//!
//! The scanner never fails. Malformed input becomes a [`Tag::Invalid`] token
//! and scanning resumes right after it; the reason is recorded as a
//! diagnostic in the scanner's [`Handler`](emberc_util::Handler).

#![warn(missing_docs)]

pub mod automaton;
pub mod chars;
pub mod config;
pub mod error;
pub mod scanner;
pub mod source_buffer;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use config::{ConfigError, ConfigResult, ScanConfig};
pub use error::LexError;
pub use scanner::Scanner;
pub use source_buffer::SourceBuffer;
pub use token::{keyword, Tag, Token, KEYWORDS};

/// Scans all of `source`, including the final [`Tag::Eof`] token.
///
/// # Example
///
/// ```
/// use emberc_lex::{tokenize, Tag};
///
/// let tokens = tokenize("'c'");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].tag, Tag::CharLiteral);
/// assert_eq!(tokens[1].tag, Tag::Eof);
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        tokens.push(token);
        if token.is_eof() {
            return tokens;
        }
    }
}
