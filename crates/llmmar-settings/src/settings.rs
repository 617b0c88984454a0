//! The persisted user preferences.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::SettingsError;
use crate::store::KeyValueStore;

/// Storage key of the server host address.
pub const IP_ADDRESS_KEY: &str = "llmIpAddress";
/// Storage key of the model name.
pub const MODEL_NAME_KEY: &str = "modelName";
/// Storage key of the verbose (streamed response) flag.
pub const VERBOSE_KEY: &str = "verbose";
/// Storage key of the dark-mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";

/// User preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Inference server host, empty when unset
    pub ip_address: String,
    /// Model to generate with (e.g. `qwen3:4b`)
    pub model_name: String,
    /// Ask the server for a streamed response
    pub verbose: bool,
    pub dark_mode: bool,
}

/// Loads and saves [`Settings`] through a key-value store.
#[derive(Clone)]
pub struct SettingsStore {
    store: Arc<dyn KeyValueStore>,
}

impl SettingsStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read every key independently.
    ///
    /// A missing or unreadable key falls back to its zero value; the load
    /// itself never fails.
    pub async fn load(&self) -> Settings {
        let settings = Settings {
            ip_address: self.read_text(IP_ADDRESS_KEY).await,
            model_name: self.read_text(MODEL_NAME_KEY).await,
            verbose: self.read_flag(VERBOSE_KEY).await,
            dark_mode: self.read_flag(DARK_MODE_KEY).await,
        };
        info!(
            "Loaded settings (host: '{}', model: '{}')",
            settings.ip_address, settings.model_name
        );
        settings
    }

    /// Write the four keys one after another.
    ///
    /// Stops at the first failing write; keys written before it keep their
    /// new values.
    pub async fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        self.store
            .set_item(IP_ADDRESS_KEY, &settings.ip_address)
            .await?;
        self.store
            .set_item(MODEL_NAME_KEY, &settings.model_name)
            .await?;
        self.store
            .set_item(VERBOSE_KEY, flag_text(settings.verbose))
            .await?;
        self.store
            .set_item(DARK_MODE_KEY, flag_text(settings.dark_mode))
            .await?;
        info!("Saved settings");
        Ok(())
    }

    async fn read_text(&self, key: &str) -> String {
        match self.store.get_item(key).await {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                warn!("Could not read setting '{}': {}", key, e);
                String::new()
            }
        }
    }

    async fn read_flag(&self, key: &str) -> bool {
        self.read_text(key).await == "true"
    }
}

fn flag_text(flag: bool) -> &'static str {
    if flag {
        "true"
    } else {
        "false"
    }
}
