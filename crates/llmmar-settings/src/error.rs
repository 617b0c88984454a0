//! Error types for settings persistence.

use thiserror::Error;

/// Errors that can occur while reading or writing settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key cannot be used as a storage entry name.
    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),

    /// No data directory could be determined.
    #[error("Could not determine a data directory. Set LLMMAR_DATA_DIR or pass --data-dir")]
    NoDataDir,
}
