//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy to work with ID-based
//! tokens.

use crate::lexer::TokenKind;
use micro_core::lang::keywords::KeywordId;
use micro_core::lang::operators::{self, OperatorId};
use micro_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return `true` for `+` and `-`.
    pub fn is_additive_op(&self) -> bool {
        self.operator_id().is_some_and(operators::is_additive)
    }

    /// Return `true` for `*` and `/`.
    pub fn is_multiplicative_op(&self) -> bool {
        self.operator_id().is_some_and(operators::is_multiplicative)
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return `true` if a statement can start with this token.
    pub fn starts_statement(&self) -> bool {
        matches!(
            self,
            TokenKind::Ident
                | TokenKind::Keyword(KeywordId::Read | KeywordId::Write | KeywordId::While | KeywordId::If)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_starts() {
        assert!(TokenKind::Ident.starts_statement());
        assert!(TokenKind::Keyword(KeywordId::While).starts_statement());
        assert!(!TokenKind::Keyword(KeywordId::Else).starts_statement());
        assert!(!TokenKind::Keyword(KeywordId::Main).starts_statement());
        assert!(!TokenKind::IntLiteral.starts_statement());
    }

    #[test]
    fn test_operator_groups() {
        assert!(TokenKind::Operator(OperatorId::Minus).is_additive_op());
        assert!(TokenKind::Operator(OperatorId::Slash).is_multiplicative_op());
        assert!(!TokenKind::Operator(OperatorId::Compare).is_additive_op());
        assert!(!TokenKind::Ident.is_multiplicative_op());
    }
}
