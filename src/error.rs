//! Error types for the filter-expression engine

use thiserror::Error;

/// Main error type for the filter-expression engine
///
/// `Scan` and `Parse` are the only errors `parse` produces; both carry the
/// character position the cursor had reached. `TooDeep` guards against
/// pathological parenthesis nesting. `UnknownField` is raised while building
/// a predicate, never while parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("scan error at {position}: {message}")]
    Scan { message: String, position: usize },

    #[error("parse error at {position}: expected {expected}, found {found}")]
    Parse {
        expected: String,
        found: String,
        position: usize,
    },

    #[error("parse error at {position}: groups nested deeper than {limit}")]
    TooDeep { limit: usize, position: usize },

    #[error("unknown filter field: {field}")]
    UnknownField { field: String },

    #[error("predicate build failed: {0}")]
    Predicate(String),
}

/// Result type alias for the filter-expression engine
pub type Result<T> = std::result::Result<T, FilterError>;
