//! Provide the canonical language vocabulary for the Micro toy language.
//!
//! This crate is intentionally small and dependency-free. It holds the reserved words, operators and punctuation
//! of the language as stable IDs plus const metadata tables, so the scanner, the recognizer and the command-line
//! tooling agree on one spelling for everything.
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global state, and no scanner/recognizer types.

pub mod lang;
