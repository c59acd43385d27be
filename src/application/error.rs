//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("problem not found in catalog: {0}")]
    ProblemNotFound(String),

    #[error("no solution file for problem: {0}")]
    SolutionMissing(String),

    #[error("solutions directory not found: {0}")]
    SolutionsDirMissing(PathBuf),

    #[error("editor '{editor}' exited unsuccessfully")]
    Editor { editor: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
