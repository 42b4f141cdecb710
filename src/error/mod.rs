//! Error module for the prefix index application.
//!
//! Library components define their own error enums; this module gathers them
//! into one application-level error used by configuration loading, dataset
//! loading and the command-line front end.

use thiserror::Error;

use crate::data_structures::prefix_index::PrefixIndexError;

pub mod config;

/// Result type alias used by the application layer.
pub type AppResult<T> = Result<T, AppError>;

/// Core error enum for the prefix index application.
#[derive(Error, Debug)]
pub enum AppError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by the prefix index itself.
    #[error("Index error: {0}")]
    Index(#[from] PrefixIndexError),

    /// A dataset line could not be understood.
    #[error("Dataset error at line {line}: {message}")]
    Dataset {
        /// One-based line number in the dataset file
        line: usize,
        /// What was wrong with the line
        message: String,
    },

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
