//! CLI commands.

pub mod chat;
pub mod send;
pub mod settings;
pub mod status;

use std::path::PathBuf;
use std::sync::Arc;

use llmmar_chat::{ChatSession, Endpoint, ServerStatus};
use llmmar_ollama::{ClientConfig, OllamaClient};
use llmmar_settings::{paths, FileStore, KeyValueStore, MemoryStore, SettingsStore};

/// Where settings are kept.
pub(crate) struct StorageOptions {
    pub data_dir: Option<PathBuf>,
    pub ephemeral: bool,
}

impl StorageOptions {
    /// Storage directory, or `None` for in-memory settings.
    pub(crate) fn storage_dir(&self) -> miette::Result<Option<PathBuf>> {
        if self.ephemeral {
            return Ok(None);
        }
        let dir = match &self.data_dir {
            Some(dir) => paths::storage_dir_in(dir),
            None => paths::storage_dir().map_err(|e| miette::miette!("{}", e))?,
        };
        Ok(Some(dir))
    }
}

/// Load settings and wire up a session against the real server.
pub(crate) async fn open_session(storage: &StorageOptions) -> miette::Result<ChatSession> {
    let store: Arc<dyn KeyValueStore> = match storage.storage_dir()? {
        Some(dir) => {
            tracing::debug!("Using settings storage at {}", dir.display());
            Arc::new(FileStore::new(dir))
        }
        None => Arc::new(MemoryStore::new()),
    };

    let client = OllamaClient::with_config(ClientConfig::from_env());
    Ok(ChatSession::start(Arc::new(client), SettingsStore::new(store)).await)
}

/// One-line description of the server state.
pub(crate) fn describe_status(endpoint: Option<&Endpoint>, status: ServerStatus) -> String {
    match endpoint {
        Some(endpoint) => format!("Server {}: {}", endpoint, status),
        None => "No server configured. Set one with: llmmar settings set --ip <host>".to_string(),
    }
}

/// Print log entries, one per line.
pub(crate) fn print_entries(entries: &[String]) {
    for entry in entries {
        println!("{}", entry);
    }
}
