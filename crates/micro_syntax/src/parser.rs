//! Recognizer for the Micro language
//!
//! A single-lookahead recursive-descent recognizer over the token stream produced by [`crate::lexer::Scanner`].
//! It answers whether the input is a syntactically valid Micro program and reports every error it meets on the way;
//! no syntax tree is built.
//!
//! ```text
//! program    ::= MAIN LBRACE stmt_list RBRACE
//! stmt_list  ::= stmt { stmt }
//! stmt       ::= ID ASSIGN expr SEMI
//!              | READ LPAREN id_list RPAREN SEMI
//!              | WRITE LPAREN expr_list RPAREN SEMI
//!              | IF LPAREN bool_expr RPAREN LBRACE stmt_list RBRACE [ELSE LBRACE stmt_list RBRACE]
//!              | WHILE LPAREN bool_expr RPAREN LBRACE stmt_list RBRACE
//! id_list    ::= ID { COMMA ID }
//! expr_list  ::= expr { COMMA expr }
//! bool_expr  ::= operand BOOLOP operand
//! operand    ::= ID | INTLITERAL | expr
//! expr       ::= term { (PLUS | MINUS) term }
//! term       ::= factor { (STAR | SLASH) factor }
//! factor     ::= ID | INTLITERAL | LPAREN expr RPAREN
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use micro_syntax::parser;
//!
//! let outcome = parser::recognize("main { if (a < 10) { write(a); } else { read(a); } }").unwrap();
//! assert!(outcome.is_success());
//! ```

use std::io::BufRead;

use crate::config::SyntaxConfig;
use crate::diagnostics::{Diagnostic, Reporter};
use crate::lexer::{Scanner, Token, TokenKind};
use crate::source::{CharSource, ReaderSource, SourceError, StrSource};
use micro_core::lang::keywords::KeywordId;
use micro_core::lang::operators::OperatorId;
use micro_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all recognizer
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
