/// Program and statement productions.
impl<S: CharSource> Recognizer<'_, S> {
    /// `program ::= MAIN LBRACE stmt_list RBRACE`
    fn program(&mut self) -> Result<(), SourceError> {
        self.match_keyword(KeywordId::Main)?;
        self.match_punct(PunctuationId::LBrace)?;
        self.stmt_list()?;
        self.match_punct(PunctuationId::RBrace)
    }

    /// `stmt_list ::= stmt { stmt }`
    fn stmt_list(&mut self) -> Result<(), SourceError> {
        self.stmt()?;
        while self.peek().starts_statement() {
            self.stmt()?;
        }
        Ok(())
    }

    /// Braced statement list of an `if`, `else` or `while` body.
    fn block(&mut self) -> Result<(), SourceError> {
        self.match_punct(PunctuationId::LBrace)?;
        if self.enter_nested() {
            self.stmt_list()?;
            self.leave_nested();
        }
        self.match_punct(PunctuationId::RBrace)
    }

    fn stmt(&mut self) -> Result<(), SourceError> {
        match self.peek() {
            TokenKind::Ident => {
                self.match_kind(TokenKind::Ident)?;
                self.match_op(OperatorId::Assign)?;
                self.expr()?;
                self.match_punct(PunctuationId::Semicolon)
            }
            TokenKind::Keyword(KeywordId::Read) => {
                self.match_keyword(KeywordId::Read)?;
                self.match_punct(PunctuationId::LParen)?;
                self.id_list()?;
                self.match_punct(PunctuationId::RParen)?;
                self.match_punct(PunctuationId::Semicolon)
            }
            TokenKind::Keyword(KeywordId::Write) => {
                self.match_keyword(KeywordId::Write)?;
                self.match_punct(PunctuationId::LParen)?;
                self.expr_list()?;
                self.match_punct(PunctuationId::RParen)?;
                self.match_punct(PunctuationId::Semicolon)
            }
            TokenKind::Keyword(KeywordId::If) => {
                self.match_keyword(KeywordId::If)?;
                self.condition()?;
                self.block()?;
                if self.peek().is_keyword(KeywordId::Else) {
                    self.match_keyword(KeywordId::Else)?;
                    self.block()?;
                }
                Ok(())
            }
            TokenKind::Keyword(KeywordId::While) => {
                self.match_keyword(KeywordId::While)?;
                self.condition()?;
                self.block()
            }
            _ => {
                self.syntax_error();
                Ok(())
            }
        }
    }

    /// Parenthesized `bool_expr` of an `if` or `while`.
    fn condition(&mut self) -> Result<(), SourceError> {
        self.match_punct(PunctuationId::LParen)?;
        self.bool_expr()?;
        self.match_punct(PunctuationId::RParen)
    }

    /// `id_list ::= ID { COMMA ID }`
    fn id_list(&mut self) -> Result<(), SourceError> {
        self.match_kind(TokenKind::Ident)?;
        while self.peek().is_punctuation(PunctuationId::Comma) {
            self.match_punct(PunctuationId::Comma)?;
            self.match_kind(TokenKind::Ident)?;
        }
        Ok(())
    }
}
