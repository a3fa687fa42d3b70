/// Expression productions.
impl<S: CharSource> Recognizer<'_, S> {
    /// `bool_expr ::= operand BOOLOP operand`
    fn bool_expr(&mut self) -> Result<(), SourceError> {
        self.operand()?;
        self.bool_op()?;
        self.operand()
    }

    /// An identifier or integer operand is exactly one token, never the start of a longer expression.
    fn operand(&mut self) -> Result<(), SourceError> {
        match self.peek() {
            kind @ (TokenKind::Ident | TokenKind::IntLiteral) => self.match_kind(kind),
            _ => self.expr(),
        }
    }

    fn bool_op(&mut self) -> Result<(), SourceError> {
        if self.peek().is_operator(OperatorId::Compare) {
            self.match_op(OperatorId::Compare)
        } else {
            self.syntax_error();
            Ok(())
        }
    }

    /// `expr_list ::= expr { COMMA expr }`
    fn expr_list(&mut self) -> Result<(), SourceError> {
        self.expr()?;
        while self.peek().is_punctuation(PunctuationId::Comma) {
            self.match_punct(PunctuationId::Comma)?;
            self.expr()?;
        }
        Ok(())
    }

    /// `expr ::= term { (PLUS | MINUS) term }`
    fn expr(&mut self) -> Result<(), SourceError> {
        self.term()?;
        while self.peek().is_additive_op() {
            self.match_kind(self.peek())?;
            self.term()?;
        }
        Ok(())
    }

    /// `term ::= factor { (STAR | SLASH) factor }`
    fn term(&mut self) -> Result<(), SourceError> {
        self.factor()?;
        while self.peek().is_multiplicative_op() {
            self.match_kind(self.peek())?;
            self.factor()?;
        }
        Ok(())
    }

    /// `factor ::= ID | INTLITERAL | LPAREN expr RPAREN`
    fn factor(&mut self) -> Result<(), SourceError> {
        match self.peek() {
            kind @ (TokenKind::Ident | TokenKind::IntLiteral) => self.match_kind(kind),
            TokenKind::Punctuation(PunctuationId::LParen) => {
                if !self.enter_nested() {
                    return Ok(());
                }
                self.match_punct(PunctuationId::LParen)?;
                self.expr()?;
                self.match_punct(PunctuationId::RParen)?;
                self.leave_nested();
                Ok(())
            }
            _ => {
                self.syntax_error();
                Ok(())
            }
        }
    }
}
