//! Error types for human

use crate::cron::CronError;
use crate::number::NumberError;
use crate::size::SizeError;

/// Errors surfaced by any converter or by the CLI plumbing
#[derive(Debug, thiserror::Error)]
pub enum HumanError {
    #[error(transparent)]
    Cron(#[from] CronError),

    #[error(transparent)]
    Number(#[from] NumberError),

    #[error(transparent)]
    Size(#[from] SizeError),

    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    #[error("No converter accepted input: {0}")]
    NoConverter(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, HumanError>;
