//! Micro Frontend
//!
//! - `lexer`: the streaming scanner
//! - `parser`: the recognizer
//! - `diagnostics`: lexical and syntax error reporting
//! - `render`: turning diagnostics into terminal output

// Syntax components are provided by the micro_syntax crate.
pub use micro_syntax::{config, diagnostics, lexer, parser, source};

// Presentation stays local to the tool.
pub mod render;
