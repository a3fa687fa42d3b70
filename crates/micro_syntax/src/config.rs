//! Limits for one scanning/recognition run.

/// Default cap on the characters buffered for one identifier or integer literal.
///
/// Matches a 100-byte scan buffer with room for a terminator.
pub const DEFAULT_MAX_TOKEN_LEN: usize = 99;

/// Default cap on nested blocks plus parenthesized sub-expressions.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

/// Configuration shared by the scanner and the recognizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxConfig {
    /// Longest identifier or integer literal the scan buffer accepts
    pub max_token_len: usize,
    /// Deepest nesting of `{ ... }` blocks and `( ... )` expressions the recognizer descends into
    pub max_nesting_depth: usize,
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            max_token_len: DEFAULT_MAX_TOKEN_LEN,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl SyntaxConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scan buffer cap
    pub fn with_max_token_len(mut self, len: usize) -> Self {
        self.max_token_len = len;
        self
    }

    /// Set the nesting cap
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }
}
