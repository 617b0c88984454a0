//! Prompt to log-line pipeline.

use std::sync::Arc;

use llmmar_ollama::{accumulate_response, Endpoint, GenerateRequest, OllamaApi};
use tracing::{debug, warn};

/// Logged instead of sending when no host is configured.
pub const NO_SERVER_MESSAGE: &str = "No IP address set. Please configure in settings.";
/// Prefix of a successful response line.
pub const RESPONSE_PREFIX: &str = "Ollama final response: ";
/// Prefix of a transport failure line.
pub const CONNECTION_FAILED_PREFIX: &str = "Connection failed: ";

/// Turns one prompt into one log line.
#[derive(Clone)]
pub struct ChatPipeline {
    api: Arc<dyn OllamaApi>,
}

impl ChatPipeline {
    pub fn new(api: Arc<dyn OllamaApi>) -> Self {
        Self { api }
    }

    /// Send a prompt and describe the outcome as a single line.
    ///
    /// A blank prompt yields `None` without any network call. Every other
    /// call yields exactly one line, whether the server answered, no host is
    /// set, or the transport failed.
    pub async fn send(
        &self,
        endpoint: Option<&Endpoint>,
        request: &GenerateRequest,
    ) -> Option<String> {
        if request.prompt.trim().is_empty() {
            debug!("Ignoring blank prompt");
            return None;
        }

        let Some(endpoint) = endpoint else {
            return Some(NO_SERVER_MESSAGE.to_string());
        };

        let entry = match self.api.generate(endpoint, request).await {
            Ok(body) => format!("{}{}", RESPONSE_PREFIX, accumulate_response(&body).trim()),
            Err(e) => {
                warn!("Generate request to {} failed: {}", endpoint, e);
                format!("{}{}", CONNECTION_FAILED_PREFIX, e)
            }
        };
        Some(entry)
    }
}
