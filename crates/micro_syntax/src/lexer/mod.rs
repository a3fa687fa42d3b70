//! Scanner for the Micro language
//!
//! Turns a character stream into tokens on demand, one [`Scanner::next_token`] call at a time:
//! - Keywords (`main`, `read`, `write`, `if`, `else`, `while`) and identifiers
//! - Integer literals
//! - Operators (`+ - * / :=` and the comparison family `< > <= >= == !=`)
//! - Punctuation (`( ) { } , ;`)
//! - `//` line comments and whitespace, which are skipped
//!
//! Bad characters are reported to the [`Reporter`] and skipped; scanning never stops on malformed input.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `buffer` - The capped scan buffer for identifier/integer runs

mod buffer;
pub mod tokens;

pub use buffer::ScanBuffer;
pub use tokens::{Token, TokenKind, keyword_id};

use std::io::BufRead;

use crate::config::SyntaxConfig;
use crate::diagnostics::{Diagnostic, Reporter};
use crate::source::{CharSource, Cursor, ReaderSource, SourceError, StrSource};
use crate::span::Span;
use micro_core::lang::operators::OperatorId;
use micro_core::lang::punctuation;

/// Return `true` for the characters the scanner skips between tokens.
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

fn is_word_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Streaming scanner over any [`CharSource`].
///
/// The scanner owns the cursor (and with it the line counter) and the scan buffer. Diagnostics go to the reporter
/// passed into each call, so the scanner and the recognizer can share one reporter without sharing ownership.
pub struct Scanner<S> {
    cursor: Cursor<S>,
    buffer: ScanBuffer,
}

impl<'a> Scanner<StrSource<'a>> {
    /// Create a scanner over an in-memory string.
    pub fn from_text(source: &'a str, config: &SyntaxConfig) -> Self {
        Self::new(StrSource::new(source), config)
    }
}

impl<S: CharSource> Scanner<S> {
    pub fn new(source: S, config: &SyntaxConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            buffer: ScanBuffer::new(config.max_token_len),
        }
    }

    /// Scan and return the next token.
    ///
    /// Returns `Eof` at end of input, and keeps returning it on later calls.
    pub fn next_token(&mut self, reporter: &mut Reporter) -> Result<Token, SourceError> {
        loop {
            self.buffer.clear();
            let start = self.cursor.offset();
            let line = self.cursor.line();

            let Some(c) = self.cursor.bump()? else {
                return Ok(Token::new(TokenKind::Eof, Span::new(start, start), line));
            };

            if is_whitespace(c) {
                continue;
            }

            let kind = if c.is_ascii_alphabetic() {
                self.scan_word(c, start, line, reporter)?
            } else if c.is_ascii_digit() {
                self.scan_integer(c, start, line, reporter)?
            } else if let Some(id) = punctuation::from_char(c) {
                TokenKind::Punctuation(id)
            } else {
                match self.scan_operator(c, start, reporter)? {
                    Some(kind) => kind,
                    // Comment or bad character: nothing to emit, keep scanning.
                    None => continue,
                }
            };

            let token = Token::new(kind, Span::new(start, self.cursor.offset()), line);
            tracing::trace!(kind = %token.kind, line = token.line, "token");
            return Ok(token);
        }
    }

    // ========================================================================
    // Runs
    // ========================================================================

    fn scan_word(
        &mut self,
        first: char,
        start: usize,
        line: usize,
        reporter: &mut Reporter,
    ) -> Result<TokenKind, SourceError> {
        self.buffer.push(first);
        while let Some(c) = self.cursor.peek()? {
            if !is_word_continue(c) {
                break;
            }
            self.cursor.bump()?;
            self.buffer.push(c);
        }
        self.check_overflow(start, line, reporter);

        // An overflowed buffer holds a truncated word, which must not be mistaken for a keyword.
        if self.buffer.overflowed() {
            return Ok(TokenKind::Ident);
        }
        Ok(match keyword_id(self.buffer.as_str()) {
            Some(id) => TokenKind::Keyword(id),
            None => TokenKind::Ident,
        })
    }

    fn scan_integer(
        &mut self,
        first: char,
        start: usize,
        line: usize,
        reporter: &mut Reporter,
    ) -> Result<TokenKind, SourceError> {
        self.buffer.push(first);
        while let Some(c) = self.cursor.peek()? {
            if !c.is_ascii_digit() {
                break;
            }
            self.cursor.bump()?;
            self.buffer.push(c);
        }
        self.check_overflow(start, line, reporter);
        Ok(TokenKind::IntLiteral)
    }

    fn check_overflow(&self, start: usize, line: usize, reporter: &mut Reporter) {
        if self.buffer.overflowed() {
            reporter.report(Diagnostic::token_too_long(
                self.buffer.cap(),
                line,
                Span::new(start, self.cursor.offset()),
            ));
        }
    }

    // ========================================================================
    // Operators and comments
    // ========================================================================

    /// Scan an operator starting with `c`.
    ///
    /// Returns `None` when nothing should be emitted: after a skipped comment, or after reporting a lexical error.
    fn scan_operator(
        &mut self,
        c: char,
        start: usize,
        reporter: &mut Reporter,
    ) -> Result<Option<TokenKind>, SourceError> {
        let op = match c {
            '+' => OperatorId::Plus,
            '-' => OperatorId::Minus,
            '*' => OperatorId::Star,
            '/' => {
                if self.cursor.eat('/')? {
                    self.skip_comment()?;
                    return Ok(None);
                }
                OperatorId::Slash
            }
            '<' | '>' => {
                self.cursor.eat('=')?;
                OperatorId::Compare
            }
            '=' | '!' => {
                if !self.cursor.eat('=')? {
                    self.lexical_error(c, start, reporter);
                    return Ok(None);
                }
                OperatorId::Compare
            }
            ':' => {
                if !self.cursor.eat('=')? {
                    self.lexical_error(c, start, reporter);
                    return Ok(None);
                }
                OperatorId::Assign
            }
            _ => {
                self.lexical_error(c, start, reporter);
                return Ok(None);
            }
        };
        Ok(Some(TokenKind::Operator(op)))
    }

    /// Discard everything through the next newline, or through end of input.
    fn skip_comment(&mut self) -> Result<(), SourceError> {
        while let Some(c) = self.cursor.bump()? {
            if c == '\n' {
                break;
            }
        }
        Ok(())
    }

    fn lexical_error(&self, found: char, start: usize, reporter: &mut Reporter) {
        let span = Span::new(start, start + found.len_utf8());
        reporter.report(Diagnostic::lexical(found, self.cursor.line(), span));
    }
}

// ============================================================================
// Convenience entry points
// ============================================================================

/// Result of scanning a whole input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexed {
    /// Every token in order; the last one is always `Eof`.
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Lexed {
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Scan a whole source with a caller-provided reporter, stopping after `Eof`.
pub fn scan_all<S: CharSource>(
    scanner: &mut Scanner<S>,
    reporter: &mut Reporter,
) -> Result<Vec<Token>, SourceError> {
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token(reporter)?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

fn lex_source<S: CharSource>(source: S, config: &SyntaxConfig) -> Result<Lexed, SourceError> {
    let mut reporter = Reporter::new();
    let mut scanner = Scanner::new(source, config);
    let tokens = scan_all(&mut scanner, &mut reporter)?;
    tracing::debug!(
        tokens = tokens.len(),
        diagnostics = reporter.error_count(),
        "scan finished"
    );
    Ok(Lexed {
        tokens,
        diagnostics: reporter.into_diagnostics(),
    })
}

/// Scan a source string with the default configuration.
///
/// An in-memory source cannot fail to read, so this never returns `Err` in practice; the `Result` keeps the
/// signature aligned with [`lex_reader`].
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Lexed, SourceError> {
    lex_source(StrSource::new(source), &SyntaxConfig::default())
}

/// Scan a source string with an explicit configuration.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex_with(source: &str, config: &SyntaxConfig) -> Result<Lexed, SourceError> {
    lex_source(StrSource::new(source), config)
}

/// Scan everything a buffered reader yields.
#[tracing::instrument(skip_all)]
pub fn lex_reader<R: BufRead>(reader: R, config: &SyntaxConfig) -> Result<Lexed, SourceError> {
    lex_source(ReaderSource::new(reader), config)
}

// ============================================================================
// TESTS
// ============================================================================
