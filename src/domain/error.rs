//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the data formats the toolkit
/// understands. These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid node token '{token}': {source}")]
    Parse {
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
