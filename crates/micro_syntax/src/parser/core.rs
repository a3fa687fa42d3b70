/// Recognizer core type and entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all recognizer methods in a single module.
/// - Error recovery is deliberately minimal: `match_kind` always advances, and a failed choice point
///   (`stmt`, `factor`, `bool_op`) reports without consuming. A single root error can therefore produce
///   several follow-on diagnostics.

/// Recognizer state: the scanner, the single lookahead token and the nesting depth.
///
/// The reporter is borrowed, so the caller keeps the diagnostics once the run is over.
pub struct Recognizer<'r, S> {
    scanner: Scanner<S>,
    reporter: &'r mut Reporter,
    lookahead: Token,
    depth: usize,
    max_depth: usize,
}

impl<'r, S: CharSource> Recognizer<'r, S> {
    /// Create a recognizer and pull the first lookahead token.
    ///
    /// ## Errors
    /// Returns [`SourceError`] if the character source fails while reading the first token.
    pub fn new(mut scanner: Scanner<S>, reporter: &'r mut Reporter, config: &SyntaxConfig) -> Result<Self, SourceError> {
        let lookahead = scanner.next_token(reporter)?;
        Ok(Self {
            scanner,
            reporter,
            lookahead,
            depth: 0,
            max_depth: config.max_nesting_depth,
        })
    }

    /// Recognize a whole program, through end of input.
    ///
    /// Returns `true` when the reporter holds no diagnostics afterwards.
    ///
    /// ## Errors
    /// Returns [`SourceError`] if the character source fails; malformed input is never an `Err`.
    pub fn recognize(mut self) -> Result<bool, SourceError> {
        self.program()?;
        self.match_kind(TokenKind::Eof)?;

        // Anything after a stray trailing token is still scanned, so its lexical errors are reported too.
        while self.lookahead.kind != TokenKind::Eof {
            self.advance()?;
        }
        Ok(!self.reporter.has_errors())
    }
}
