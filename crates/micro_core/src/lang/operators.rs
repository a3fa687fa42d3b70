//! Operator vocabulary.
//!
//! Operators are identified by [`OperatorId`]. An operator may be written with more than one spelling: every
//! comparison (`<`, `>`, `<=`, `>=`, `==`, `!=`) is the single [`OperatorId::Compare`] operator, because the grammar
//! only ever asks "is this a comparison?" and never which one.
//!
//! ## Examples
//! ```rust
//! use micro_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str(":="), Some(OperatorId::Assign));
//! assert_eq!(operators::from_str("!="), Some(OperatorId::Compare));
//! assert_eq!(operators::from_str("<="), operators::from_str(">"));
//! ```

/// Stable identifier for operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    Plus,
    Minus,
    Star,
    Slash,
    Assign,
    Compare,
}

/// Syntactic role of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    /// `+` and `-` between terms.
    Additive,
    /// `*` and `/` between factors.
    Multiplicative,
    /// `:=` in an assignment statement.
    Assignment,
    /// The comparison in a boolean expression.
    Comparison,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `spellings` lists every accepted spelling; `canonical` is always the first one.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub canonical: &'static str,
    pub spellings: &'static [&'static str],
    pub category: OperatorCategory,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    info(OperatorId::Plus, &["+"], OperatorCategory::Additive),
    info(OperatorId::Minus, &["-"], OperatorCategory::Additive),
    info(OperatorId::Star, &["*"], OperatorCategory::Multiplicative),
    info(OperatorId::Slash, &["/"], OperatorCategory::Multiplicative),
    info(OperatorId::Assign, &[":="], OperatorCategory::Assignment),
    info(
        OperatorId::Compare,
        &["<", ">", "<=", ">=", "==", "!="],
        OperatorCategory::Comparison,
    ),
];

/// Return the canonical spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).canonical
}

/// Return every accepted spelling for an operator.
pub fn spellings(id: OperatorId) -> &'static [&'static str] {
    info_for(id).spellings
}

/// Return the category for an operator.
pub fn category(id: OperatorId) -> OperatorCategory {
    info_for(id).category
}

/// Return `true` for `+` and `-`.
pub fn is_additive(id: OperatorId) -> bool {
    category(id) == OperatorCategory::Additive
}

/// Return `true` for `*` and `/`.
pub fn is_multiplicative(id: OperatorId) -> bool {
    category(id) == OperatorCategory::Multiplicative
}

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .expect("INVARIANT: every OperatorId has an OPERATORS entry")
}

/// Resolve any accepted spelling to its identifier.
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS
        .iter()
        .find(|o| {
            let spellings: &[&str] = o.spellings;
            spellings.contains(&s)
        })
        .map(|o| o.id)
}

const fn info(id: OperatorId, spellings: &'static [&'static str], category: OperatorCategory) -> OperatorInfo {
    OperatorInfo {
        id,
        canonical: spellings[0],
        spellings,
        category,
    }
}
