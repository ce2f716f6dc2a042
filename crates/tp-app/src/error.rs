//! Error types for the tp-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and provides a unified error interface for the CLI and embedding brokers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to load network file {path}: {source}")]
    NetworkLoad {
        path: PathBuf,
        source: tp_config::ConfigError,
    },

    #[error("Duplicate network: {0}")]
    DuplicateNetwork(String),

    #[error("No policy registered for topology: {0}")]
    UnknownTopology(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for tp-app operations.
pub type AppResult<T> = Result<T, AppError>;
