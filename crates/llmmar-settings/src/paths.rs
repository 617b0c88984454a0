//! Path utilities for llmmar data directories.

use std::path::PathBuf;

use crate::error::SettingsError;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "LLMMAR_DATA_DIR";

/// Get the llmmar data directory (`$LLMMAR_DATA_DIR` or `~/.llmmar/`).
pub fn data_dir() -> Result<PathBuf, SettingsError> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".llmmar"))
        .ok_or(SettingsError::NoDataDir)
}

/// Get the key-value storage directory under a data directory.
pub fn storage_dir_in(data_dir: impl Into<PathBuf>) -> PathBuf {
    data_dir.into().join("storage")
}

/// Get the default key-value storage directory (`<data dir>/storage/`).
pub fn storage_dir() -> Result<PathBuf, SettingsError> {
    data_dir().map(storage_dir_in)
}
