//! Error types for the generation domain

use thiserror::Error;

/// Errors that can occur while generating the client module.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("schema error: {0}")]
    Schema(String),

    #[error("operation name collision: '{name}' is generated by both {first} and {second}")]
    NameCollision {
        name: String,
        first: String,
        second: String,
    },

    #[error("schema loading error: {0}")]
    Load(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("generated module is out of date: {0}")]
    Check(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
