#![forbid(unsafe_code)]
//! Micro language tools
//!
//! Micro is a tiny teaching language (`main { read(a); write(a + 1); }`). This crate wraps the `micro_syntax` frontend
//! in a command-line tool with two modes: dumping the token stream of a file, and checking that a file is a
//! syntactically valid program.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a bug (logic error), use `.expect("INVARIANT: reason")` with a clear
//!   explanation.

pub mod cli;
pub mod frontend;
pub mod version;

pub use frontend::config;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;
