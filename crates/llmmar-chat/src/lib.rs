//! # llmmar chat
//!
//! UI-facing state of the chat client:
//!
//! ```text
//!   user input ──> ChatSession ──> ChatPipeline ──> OllamaApi::generate
//!                     │  │                │
//!                     │  │                └──> one line ──> ChatLog
//!                     │  └──> ConnectionMonitor ──> OllamaApi::probe
//!                     └──> SettingsStore (load on start, save on commit)
//! ```

mod log;
mod monitor;
mod pipeline;
mod session;

#[cfg(test)]
mod testing;

pub use log::ChatLog;
pub use monitor::ConnectionMonitor;
pub use pipeline::{
    ChatPipeline, CONNECTION_FAILED_PREFIX, NO_SERVER_MESSAGE, RESPONSE_PREFIX,
};
pub use session::{
    ChatSession, LOGS_DELETED_MESSAGE, SENT_PREFIX, SETTINGS_SAVED_MESSAGE,
};

pub use llmmar_ollama::{Endpoint, GenerateRequest, OllamaApi, ServerStatus};
pub use llmmar_settings::Settings;
