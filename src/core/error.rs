//! Error types for the roadgraph library.
//!
//! Absence (unknown node id, no route found) is a value, not an error: query
//! APIs return `Option`/`bool`. The variants here cover rejected mutations
//! and persistence failures only.

use thiserror::Error;

/// Main error type for roadgraph operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Node or edge data rejected by validation; one message per violation.
    /// The mutation is rejected as a whole.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Snapshot file I/O failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot (de)serialization failure.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Convenience result type for roadgraph operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_joins_messages() {
        let err = Error::Validation(vec!["first".to_string(), "second".to_string()]);
        assert_eq!(err.to_string(), "validation failed: first; second");
    }
}
