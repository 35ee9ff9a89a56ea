use thiserror::Error;

/// Suffix engine error types
#[derive(Error, Debug)]
pub enum TldError {
    /// No right-anchored part of the input matched the suffix table.
    #[error("Can't get tld from {input}")]
    SuffixNotFound { input: String },

    #[error("Parse error at line {line}: {message}")]
    ParseErrorAtLine { line: usize, message: String },

    #[error("Unsupported rule at line {line}: {rule}")]
    UnsupportedRule { line: usize, rule: String },

    #[error("Duplicate suffix at line {line}: {suffix}")]
    DuplicateSuffix { line: usize, suffix: String },

    #[error("Invalid link: {0}")]
    InvalidLink(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

impl TldError {
    /// Build a not-found error for the given input.
    pub fn not_found(input: impl Into<String>) -> Self {
        TldError::SuffixNotFound {
            input: input.into(),
        }
    }

    /// Whether this is the per-call "no suffix matched" condition, as
    /// opposed to a dataset or link error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TldError::SuffixNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, TldError>;
