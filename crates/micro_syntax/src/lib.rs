//! Syntax frontend for the Micro language: character source, scanner, recognizer, diagnostics.
//!
//! The recognizer answers one question: is the input a syntactically valid Micro program? It reports every lexical
//! and syntax error it runs into and keeps going. No syntax tree is built.
//!
//! ## Notes
//! - This crate is intentionally "recognition-only": no AST, no symbol table, no evaluation.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `micro_core::lang` registries.
//! - All state of one run (line counter, error flag, lookahead) is owned by values threaded through the call chain;
//!   there is no global state, so independent runs never observe each other.
//!
//! ## Examples
//! ```rust
//! use micro_syntax::parser;
//!
//! let outcome = parser::recognize("main { read(a, b); write(a + b); }").unwrap();
//! assert!(outcome.is_success());
//!
//! let outcome = parser::recognize("main { x := ; }").unwrap();
//! assert_eq!(outcome.diagnostics().len(), 1);
//! ```

pub mod config;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod source;
pub mod span;
pub mod token_helpers;

pub use config::SyntaxConfig;
pub use diagnostics::{Diagnostic, DiagnosticKind, Reporter};
pub use source::SourceError;
pub use span::Span;
