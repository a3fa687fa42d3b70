/// Lookahead primitives and error reporting.
impl<S: CharSource> Recognizer<'_, S> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Kind of the current lookahead token.
    fn peek(&self) -> TokenKind {
        self.lookahead.kind
    }

    /// Replace the lookahead with the next token from the scanner.
    fn advance(&mut self) -> Result<(), SourceError> {
        tracing::trace!(consumed = %self.lookahead.kind, line = self.lookahead.line, "advance");
        self.lookahead = self.scanner.next_token(self.reporter)?;
        Ok(())
    }

    /// Expect `expected`, reporting a syntax error if the lookahead differs. Advances either way.
    fn match_kind(&mut self, expected: TokenKind) -> Result<(), SourceError> {
        if self.peek() != expected {
            tracing::trace!(%expected, found = %self.peek(), "mismatch");
            self.syntax_error();
        }
        self.advance()
    }

    fn match_keyword(&mut self, id: KeywordId) -> Result<(), SourceError> {
        self.match_kind(TokenKind::Keyword(id))
    }

    fn match_punct(&mut self, id: PunctuationId) -> Result<(), SourceError> {
        self.match_kind(TokenKind::Punctuation(id))
    }

    fn match_op(&mut self, id: OperatorId) -> Result<(), SourceError> {
        self.match_kind(TokenKind::Operator(id))
    }

    /// Report the lookahead as unexpected.
    fn syntax_error(&mut self) {
        let token = self.lookahead;
        self.reporter.report(Diagnostic::syntax(token.kind, token.line, token.span));
    }

    // ========================================================================
    // Nesting
    // ========================================================================

    /// Enter one level of block or parenthesis nesting.
    ///
    /// Returns `false` (after reporting) when the level would exceed the configured depth; the caller must then skip
    /// the nested production without consuming anything.
    fn enter_nested(&mut self) -> bool {
        if self.depth >= self.max_depth {
            let token = self.lookahead;
            self.reporter
                .report(Diagnostic::nesting_too_deep(self.max_depth, token.line, token.span));
            return false;
        }
        self.depth += 1;
        true
    }

    fn leave_nested(&mut self) {
        self.depth -= 1;
    }
}
