//! Diagnostics and error reporting for Micro
//!
//! Errors in the subject program are *reported, not thrown*: the scanner and the recognizer hand every
//! [`Diagnostic`] to a [`Reporter`] and carry on with the next character or grammar decision. The reporter owns the
//! "an error occurred" state of one run.
//!
//! The `Display` form of a diagnostic is the classic plain-text message; the `miette::Diagnostic` impl adds a code
//! and a labelled span for rich rendering.

use std::fmt;

use crate::lexer::TokenKind;
use crate::span::Span;

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A character (or character pair) that cannot start or complete any token.
    Lexical { found: char },
    /// The lookahead token is not a legal continuation at this grammar position.
    Syntax { unexpected: TokenKind },
    /// An identifier or integer literal ran past the scan buffer cap.
    TokenTooLong { limit: usize },
    /// Blocks or parentheses nested past the recognizer's depth cap.
    NestingTooDeep { limit: usize },
}

impl DiagnosticKind {
    /// Stable diagnostic code.
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::Lexical { .. } => "micro::lexical",
            DiagnosticKind::Syntax { .. } => "micro::syntax",
            DiagnosticKind::TokenTooLong { .. } => "micro::token_too_long",
            DiagnosticKind::NestingTooDeep { .. } => "micro::nesting_too_deep",
        }
    }
}

/// A reported error with its line and source span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: usize,
    pub span: Span,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, line: usize, span: Span) -> Self {
        Self { kind, line, span }
    }

    pub fn lexical(found: char, line: usize, span: Span) -> Self {
        Self::new(DiagnosticKind::Lexical { found }, line, span)
    }

    pub fn syntax(unexpected: TokenKind, line: usize, span: Span) -> Self {
        Self::new(DiagnosticKind::Syntax { unexpected }, line, span)
    }

    pub fn token_too_long(limit: usize, line: usize, span: Span) -> Self {
        Self::new(DiagnosticKind::TokenTooLong { limit }, line, span)
    }

    pub fn nesting_too_deep(limit: usize, line: usize, span: Span) -> Self {
        Self::new(DiagnosticKind::NestingTooDeep { limit }, line, span)
    }

    /// Short description of the offending span, for labelled rendering.
    pub fn label(&self) -> String {
        match self.kind {
            DiagnosticKind::Lexical { found } => format!("unexpected character {found:?}"),
            DiagnosticKind::Syntax { unexpected } => format!("unexpected {unexpected} token"),
            DiagnosticKind::TokenTooLong { limit } => format!("longer than {limit} characters"),
            DiagnosticKind::NestingTooDeep { limit } => format!("nested deeper than {limit} levels"),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::Lexical { .. } => write!(f, "Lexical error on line {}", self.line),
            DiagnosticKind::Syntax { unexpected } => write!(
                f,
                "syntax error on line {}\nError was an unexpected {} token",
                self.line, unexpected
            ),
            DiagnosticKind::TokenTooLong { limit } => write!(
                f,
                "Lexical error on line {}: token longer than {} characters",
                self.line, limit
            ),
            DiagnosticKind::NestingTooDeep { limit } => write!(
                f,
                "syntax error on line {}: nesting deeper than {} levels",
                self.line, limit
            ),
        }
    }
}

impl std::error::Error for Diagnostic {}

impl miette::Diagnostic for Diagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        let label = miette::LabeledSpan::new_with_span(Some(self.label()), self.span);
        Some(Box::new(std::iter::once(label)))
    }
}

// ============================================================================
// Reporter
// ============================================================================

/// Receives each diagnostic the moment it is reported.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: &Diagnostic);
}

impl<F: FnMut(&Diagnostic)> DiagnosticSink for F {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self(diagnostic)
    }
}

/// Error sink for one scanning/recognition run.
///
/// Without a live sink every diagnostic is kept. With one, diagnostics are handed to the sink and dropped, and only
/// the count survives, so memory stays constant however many errors the input holds.
///
/// Once anything has been reported, [`Reporter::has_errors`] stays `true` for the rest of the run.
#[derive(Default)]
pub struct Reporter {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    sink: Option<Box<dyn DiagnosticSink>>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reporter that also forwards every diagnostic to `sink` as it arrives.
    pub fn with_sink(sink: impl DiagnosticSink + 'static) -> Self {
        Self {
            diagnostics: Vec::new(),
            error_count: 0,
            sink: Some(Box::new(sink)),
        }
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(
            code = diagnostic.kind.code(),
            line = diagnostic.line,
            start = diagnostic.span.start,
            "diagnostic reported"
        );
        self.error_count += 1;
        match self.sink.as_mut() {
            Some(sink) => sink.emit(&diagnostic),
            None => self.diagnostics.push(diagnostic),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Number of diagnostics reported so far, retained or not.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Retained diagnostics; always empty when a live sink is installed.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter")
            .field("diagnostics", &self.diagnostics)
            .field("error_count", &self.error_count)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}
