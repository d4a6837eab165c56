//! Common error types for the kanji tools

use thiserror::Error;

/// Common result type for kanji operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the kanji crates
///
/// Only conditions that stop an input from being read at all end up here.
/// Per-record and per-entry problems are reported through their own types
/// (`ParseError`, `RadicalError`, `SchemaError`) and handled fail-soft.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input (radical reference list)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed TOML configuration file
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
