//! Token types for the Micro scanner.
//!
//! The scanner uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators (every comparison spelling is `OperatorId::Compare`)
//! - `Punctuation(PunctuationId)` for punctuation tokens
//!
//! ## Notes
//! - Tokens carry no lexeme: the grammar only distinguishes kinds, so identifier names and literal values are
//!   dropped as soon as the scanner has classified them.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::span::Span;
use micro_core::lang::keywords::{self, KeywordId};
use micro_core::lang::operators::OperatorId;
use micro_core::lang::punctuation::PunctuationId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident,
    IntLiteral,

    // ========== Special ==========
    Eof, // end of input
}

impl TokenKind {
    /// Uppercase label used by the token dump and by syntax error messages.
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Keyword(id) => match id {
                KeywordId::Main => "MAIN",
                KeywordId::Read => "READ",
                KeywordId::Write => "WRITE",
                KeywordId::If => "IF",
                KeywordId::Else => "ELSE",
                KeywordId::While => "WHILE",
            },
            TokenKind::Operator(id) => match id {
                OperatorId::Plus => "PLUSOP",
                OperatorId::Minus => "MINUSOP",
                OperatorId::Star => "MULTOP",
                OperatorId::Slash => "DIVOP",
                OperatorId::Assign => "ASSIGNOP",
                OperatorId::Compare => "BOOLOP",
            },
            TokenKind::Punctuation(id) => match id {
                PunctuationId::Comma => "COMMA",
                PunctuationId::Semicolon => "SEMICOLON",
                PunctuationId::LParen => "LPAREN",
                PunctuationId::RParen => "RPAREN",
                PunctuationId::LBrace => "LBRACK",
                PunctuationId::RBrace => "RBRACK",
            },
            TokenKind::Ident => "ID",
            TokenKind::IntLiteral => "INTLITERAL",
            TokenKind::Eof => "SCANEOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A token with its kind, source span and starting line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub line: usize,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span, line: usize) -> Self {
        Self { kind, span, line }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
