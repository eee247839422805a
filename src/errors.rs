use std::result::Result as StdResult;

use thiserror::Error;

/// Recoverable conditions raised by the accounting core.
///
/// None of these are fatal: the shell reports them and keeps running.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookError {
    #[error("Account '{0}' was already created")]
    DuplicateAccount(String),
    #[error("Account '{0}' does not exist")]
    AccountNotFound(String),
    #[error("'{0}' not found in inventory")]
    ItemNotFound(String),
    #[error("Not enough '{name}' in inventory. Current quantity: {available}")]
    InsufficientStock {
        name: String,
        requested: u32,
        available: u32,
    },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type BookResult<T> = StdResult<T, BookError>;

/// Errors that abort the shell entirely.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Line editor failed: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Failures while loading or saving CLI preferences.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("unknown config key `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
}
