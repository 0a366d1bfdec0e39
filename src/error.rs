//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Covers input discovery and parsing, minimal document shape checks, argument
//! validation, and output write failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input file '{}' not found", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Invalid JSON in '{}': {source}", path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Top-level document in '{}' is not a JSON object", path.display())]
    NotAnObject { path: PathBuf },

    #[error("'runs' must be an array, found {found}")]
    InvalidRuns { found: &'static str },

    #[error("Run {index} is not a JSON object")]
    InvalidRun { index: usize },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Failed to write '{}': {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Short JSON type name used in shape diagnostics.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
