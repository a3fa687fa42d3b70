//! Micro language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved keywords, operators and punctuation.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via the
//! registry tables instead of comparing strings at every call site.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no IO, no side effects.
//! - The scanner and recognizer enforce syntax; registries only provide spellings and metadata.
//!
//! ## Examples
//! ```rust
//! use micro_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("while"), Some(KeywordId::While));
//! assert_eq!(keywords::as_str(KeywordId::While), "while");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
