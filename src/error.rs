// Custom Error types live here

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidSettings(String),

    #[error("Unsupported database url scheme: '{0}'")]
    UnsupportedBackend(String),

    #[error("Track {0} is already persisted")]
    AlreadyPersisted(i64),

    #[error("Database did not report a generated id for the inserted track")]
    MissingGeneratedId,
}

pub type Result<T> = std::result::Result<T, StoreError>;
