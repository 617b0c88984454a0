//! Chat session state and user actions.

use std::sync::{Arc, PoisonError, RwLock};

use llmmar_ollama::{Endpoint, GenerateRequest, OllamaApi, ServerStatus};
use llmmar_settings::{Settings, SettingsError, SettingsStore};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::log::ChatLog;
use crate::monitor::ConnectionMonitor;
use crate::pipeline::ChatPipeline;

/// Prefix of the echo line logged for every submitted message.
pub const SENT_PREFIX: &str = "Sent: ";
/// Logged after settings were persisted.
pub const SETTINGS_SAVED_MESSAGE: &str = "Settings saved.";
/// Left in the log after it was cleared.
pub const LOGS_DELETED_MESSAGE: &str = "Logs deleted.";

/// Everything the chat screen needs: settings, log, and server status.
pub struct ChatSession {
    settings: RwLock<Settings>,
    store: SettingsStore,
    pipeline: ChatPipeline,
    monitor: ConnectionMonitor,
    log: ChatLog,
    /// When set, sends run one at a time in submission order
    single_flight: Option<Mutex<()>>,
}

impl ChatSession {
    /// Create a session, loading the persisted settings once.
    pub async fn start(api: Arc<dyn OllamaApi>, store: SettingsStore) -> Self {
        let settings = store.load().await;
        Self {
            settings: RwLock::new(settings),
            store,
            pipeline: ChatPipeline::new(Arc::clone(&api)),
            monitor: ConnectionMonitor::new(api),
            log: ChatLog::new(),
            single_flight: None,
        }
    }

    /// Serialize sends through a single slot.
    pub fn with_single_flight(mut self) -> Self {
        self.single_flight = Some(Mutex::new(()));
        self
    }

    /// Current in-memory settings.
    pub fn settings(&self) -> Settings {
        self.settings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Endpoint for the configured host, if any.
    pub fn endpoint(&self) -> Option<Endpoint> {
        Endpoint::from_host(&self.settings().ip_address)
    }

    pub fn log(&self) -> &ChatLog {
        &self.log
    }

    pub fn monitor(&self) -> &ConnectionMonitor {
        &self.monitor
    }

    /// Probe the configured host again.
    pub async fn refresh_status(&self) -> ServerStatus {
        let endpoint = self.endpoint();
        self.monitor.refresh(endpoint.as_ref()).await
    }

    /// Echo a user message into the log, then send it.
    ///
    /// Blank messages are ignored entirely. Returns whether anything was
    /// logged.
    pub async fn submit(&self, message: &str) -> bool {
        if message.trim().is_empty() {
            return false;
        }
        self.log.push(format!("{}{}", SENT_PREFIX, message));
        self.dispatch(message).await
    }

    /// Send a prompt with the current settings and append the outcome.
    ///
    /// Appends exactly one line unless the prompt is blank.
    pub async fn dispatch(&self, prompt: &str) -> bool {
        let _slot = match &self.single_flight {
            Some(slot) => Some(slot.lock().await),
            None => None,
        };

        let settings = self.settings();
        let endpoint = Endpoint::from_host(&settings.ip_address);
        let request = GenerateRequest::new(settings.model_name, prompt, settings.verbose);

        match self.pipeline.send(endpoint.as_ref(), &request).await {
            Some(entry) => {
                self.log.push(entry);
                true
            }
            None => false,
        }
    }

    /// Apply new settings, persist them, and re-probe if the host changed.
    ///
    /// The in-memory settings are replaced before anything is written, so
    /// they hold even when persisting fails part way.
    pub async fn save_settings(&self, settings: Settings) -> Result<(), SettingsError> {
        let host_changed = {
            let mut current = self
                .settings
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let changed = current.ip_address != settings.ip_address;
            *current = settings.clone();
            changed
        };

        let saved = self.store.save(&settings).await;
        match &saved {
            Ok(()) => self.log.push(SETTINGS_SAVED_MESSAGE),
            Err(e) => warn!("Failed to persist settings: {}", e),
        }

        if host_changed {
            info!("Server host changed to '{}'", settings.ip_address);
            self.refresh_status().await;
        }

        saved
    }

    /// Clear the log, leaving a single note behind.
    pub fn delete_logs(&self) {
        self.log.clear();
        self.log.push(LOGS_DELETED_MESSAGE);
    }
}
