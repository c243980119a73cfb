//! Shared helpers for the emberc-lex integration tests.

#![allow(dead_code)]

use std::sync::Once;

use emberc_lex::{Scanner, Tag, Token};
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Installs a test-writer subscriber filtered by `RUST_LOG`.
///
/// Run with `RUST_LOG=emberc_lex=trace` to see every token.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .with_target(false)
            .try_init();
    });
}

/// Scans `source` to the end, keeping the final `Eof`.
pub fn scan(source: &str) -> Vec<Token> {
    init_tracing();
    emberc_lex::tokenize(source)
}

/// Tags of every token, including the final `Eof`.
pub fn tags(source: &str) -> Vec<Tag> {
    scan(source).into_iter().map(|t| t.tag).collect()
}

/// Tag and lexeme of every token before `Eof`.
pub fn lexemes(source: &str) -> Vec<(Tag, String)> {
    init_tracing();
    let mut scanner = Scanner::new(source);
    let mut out = Vec::new();
    loop {
        let token = scanner.next_token();
        if token.is_eof() {
            return out;
        }
        let text = scanner
            .lexeme(&token)
            .expect("scanner produced a span outside its buffer");
        out.push((token.tag, text));
    }
}

/// Source text with every token lexeme replaced by spaces, keeping newlines.
///
/// Whatever is left is exactly the trivia the scanner skipped.
pub fn blank_tokens(source: &str, tokens: &[Token]) -> String {
    let mut chars: Vec<char> = source.chars().collect();
    for token in tokens.iter().filter(|t| !t.is_eof()) {
        for offset in token.span.range() {
            if chars[offset] != '\n' {
                chars[offset] = ' ';
            }
        }
    }
    chars.into_iter().collect()
}
