// ABOUTME: Error types for article template operations
// ABOUTME: Covers missing placeholder values and malformed values files

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArticleError {
    #[error("Missing values for placeholders: {}", names.join(", "))]
    MissingValues { names: Vec<String> },

    #[error("Invalid values file {path}: {message}")]
    InvalidValues { path: String, message: String },

    #[error("Value for '{key}' must be a string, number, or boolean")]
    NestedValue { key: String },

    #[error("Unknown missing-value policy: {0}")]
    UnknownPolicy(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ArticleError>;
