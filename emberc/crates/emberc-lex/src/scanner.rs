//! The scanner: walks a [`SourceBuffer`] with the automaton.
//!
//! Each call to [`Scanner::next_token`] starts the automaton in
//! [`State::Start`] at the cursor and feeds it one lookahead character at a
//! time until a transition finishes a token. The cursor only moves forward.

use emberc_util::{Diagnostic, DiagnosticBuilder, Handler, Span, SpanResult};
use tracing::{debug, trace};

use crate::automaton::{self, Action, State};
use crate::config::ScanConfig;
use crate::source_buffer::SourceBuffer;
use crate::token::{keyword, Tag, Token};

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// On-demand tokenizer over one source text.
///
/// The scanner owns its buffer, position and line counter, and collects a
/// diagnostic for every invalid token it produces.
///
/// # Example
///
/// ```
/// use emberc_lex::{Scanner, Tag};
///
/// let mut scanner = Scanner::new("if x then 1 else 2");
/// let tags: Vec<Tag> = scanner.by_ref().map(|t| t.tag).collect();
/// assert_eq!(
///     tags,
///     [Tag::If, Tag::Identifier, Tag::Then, Tag::IntegerLiteral, Tag::Else, Tag::IntegerLiteral]
/// );
/// assert_eq!(scanner.next_token().tag, Tag::Eof);
/// ```
#[derive(Debug)]
pub struct Scanner {
    /// Characters being scanned.
    buffer: SourceBuffer,

    /// Offset of the next unread character.
    cursor: usize,

    /// 1-based line of the next unread character.
    line: u32,

    /// Trivia and reporting options.
    config: ScanConfig,

    /// Collected diagnostics for invalid tokens.
    handler: Handler,
}

static_assertions::assert_impl_all!(Scanner: Send);

impl Scanner {
    /// Creates a scanner with the default configuration.
    ///
    /// The source is not validated up front; malformed input shows up as
    /// [`Tag::Invalid`] tokens.
    pub fn new(source: &str) -> Self {
        Self::with_config(source, ScanConfig::default())
    }

    /// Creates a scanner with the given configuration.
    pub fn with_config(source: &str, config: ScanConfig) -> Self {
        let mut scanner = Self {
            buffer: SourceBuffer::new(source),
            cursor: 0,
            line: 1,
            config,
            handler: Handler::new(),
        };
        scanner.skip_prelude();
        debug!(
            len = scanner.buffer.len(),
            start = scanner.cursor,
            "scanner created"
        );
        scanner
    }

    /// Skips a byte-order mark and a shebang line, as configured.
    fn skip_prelude(&mut self) {
        if self.config.skip_bom && self.buffer.get(0) == Some(BYTE_ORDER_MARK) {
            self.cursor = 1;
        }
        if self.config.skip_shebang
            && self.buffer.get(self.cursor) == Some('#')
            && self.buffer.get(self.cursor + 1) == Some('!')
        {
            while let Some(c) = self.buffer.get(self.cursor) {
                if c == '\n' {
                    break;
                }
                self.cursor += 1;
            }
        }
    }

    /// Produces the next token.
    ///
    /// Trivia before the token is skipped. At the end of input this returns
    /// [`Tag::Eof`] with the span `len..=len`, and keeps returning it on
    /// every later call.
    pub fn next_token(&mut self) -> Token {
        let mut state = State::Start;
        let mut start = self.cursor;
        let mut line = self.line;

        loop {
            let lookahead = self.buffer.get(self.cursor);
            let following = self.buffer.get(self.cursor + 1);
            let transition = automaton::step(state, lookahead, following);

            match transition.action {
                Action::Consume => self.bump(lookahead),
                Action::Hold => {}
                Action::Skip => {
                    self.bump(lookahead);
                    start = self.cursor;
                    line = self.line;
                }
            }

            if let Some(tag) = transition.tag {
                return self.finish(tag, state, lookahead, start, line);
            }
            state = transition.next;
        }
    }

    /// Consumes `c`. The line counter moves only when a newline is consumed.
    #[inline]
    fn bump(&mut self, c: Option<char>) {
        if let Some(c) = c {
            self.cursor += 1;
            if c == '\n' {
                self.line += 1;
            }
        }
    }

    fn finish(
        &mut self,
        tag: Tag,
        state: State,
        lookahead: Option<char>,
        start: usize,
        line: u32,
    ) -> Token {
        let span = if self.cursor > start {
            Span::new(start, self.cursor - 1)
        } else {
            Span::point(start)
        };

        let tag = match tag {
            Tag::Identifier => self
                .buffer
                .text(span)
                .ok()
                .and_then(|text| keyword(&text))
                .unwrap_or(Tag::Identifier),
            Tag::Invalid => {
                self.report(state, lookahead, span, line);
                Tag::Invalid
            }
            tag => tag,
        };

        trace!(?tag, %span, line, "token");
        Token::new(tag, span, line)
    }

    fn report(&self, state: State, lookahead: Option<char>, span: Span, line: u32) {
        let error = state.diagnose(lookahead);
        debug!(%error, %span, line, "invalid token");
        if !self.config.emit_diagnostics {
            return;
        }
        let mut builder = DiagnosticBuilder::error(error.to_string())
            .code(error.code())
            .span(span)
            .line(line);
        if let Some(help) = error.help() {
            builder = builder.help(help);
        }
        builder.emit(&self.handler);
    }

    /// Text of `token`. End of input has an empty lexeme.
    ///
    /// # Errors
    ///
    /// Returns a [`SpanError`](emberc_util::SpanError) if the token's span
    /// does not lie inside this scanner's buffer.
    pub fn lexeme(&self, token: &Token) -> SpanResult<String> {
        if token.is_eof() {
            return Ok(String::new());
        }
        self.buffer.text(token.span)
    }

    /// Line of the next unread character.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Offset of the next unread character.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// The buffer being scanned.
    #[inline]
    pub fn source(&self) -> &SourceBuffer {
        &self.buffer
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// The handler collecting diagnostics for invalid tokens.
    #[inline]
    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Diagnostics reported so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.handler.diagnostics()
    }
}

/// Yields tokens up to, but not including, end of input.
impl Iterator for Scanner {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl std::iter::FusedIterator for Scanner {}
