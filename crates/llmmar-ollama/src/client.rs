//! Ollama API client for probing and generation.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;

/// Reachability of the inference server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    Checking,
    Online,
    Offline,
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ServerStatus::Checking => "checking",
            ServerStatus::Online => "online",
            ServerStatus::Offline => "offline",
        };
        f.write_str(label)
    }
}

/// Errors from the Ollama client.
#[derive(Debug, Error)]
pub enum OllamaError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Ollama server not reachable at {0}")]
    Unreachable(String),
}

/// Request to the Ollama generate API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

impl GenerateRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>, stream: bool) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream,
        }
    }
}

/// The two server calls the chat front-end depends on.
#[async_trait]
pub trait OllamaApi: Send + Sync {
    /// Check whether the server answers `GET /api/tags` with a 2xx status.
    ///
    /// An absent endpoint is `Offline` without touching the network. Never
    /// fails: every error collapses into `Offline`.
    async fn probe(&self, endpoint: Option<&Endpoint>) -> ServerStatus;

    /// Issue a generate request and return the full response body as text.
    ///
    /// The HTTP status is not inspected; only transport failures are errors.
    async fn generate(
        &self,
        endpoint: &Endpoint,
        request: &GenerateRequest,
    ) -> Result<String, OllamaError>;
}

/// Ollama API client.
pub struct OllamaClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl OllamaClient {
    /// Create a new Ollama client with default settings.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new Ollama client with custom timeouts.
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn transport_error(endpoint: &Endpoint, e: reqwest::Error) -> OllamaError {
        if e.is_connect() {
            OllamaError::Unreachable(endpoint.base_url())
        } else {
            OllamaError::Http(e)
        }
    }
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OllamaApi for OllamaClient {
    async fn probe(&self, endpoint: Option<&Endpoint>) -> ServerStatus {
        let Some(endpoint) = endpoint else {
            debug!("No host configured, reporting offline");
            return ServerStatus::Offline;
        };

        let mut request = self.client.get(endpoint.tags_url());
        if let Some(timeout) = self.config.probe_timeout {
            request = request.timeout(timeout);
        }

        match request.send().await {
            Ok(response) if response.status().is_success() => {
                debug!("Probe of {} succeeded", endpoint);
                ServerStatus::Online
            }
            Ok(response) => {
                debug!("Probe of {} returned {}", endpoint, response.status());
                ServerStatus::Offline
            }
            Err(e) => {
                debug!("Probe of {} failed: {}", endpoint, e);
                ServerStatus::Offline
            }
        }
    }

    async fn generate(
        &self,
        endpoint: &Endpoint,
        request: &GenerateRequest,
    ) -> Result<String, OllamaError> {
        info!(
            "Sending prompt to {} (model: {}, stream: {})",
            endpoint, request.model, request.stream
        );

        let mut builder = self.client.post(endpoint.generate_url()).json(request);
        if let Some(timeout) = self.config.request_timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Self::transport_error(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Generate request to {} returned {}", endpoint, status);
        }

        // The whole body is read even for streamed responses
        let body = response
            .text()
            .await
            .map_err(|e| Self::transport_error(endpoint, e))?;
        debug!("Received {} bytes from {}", body.len(), endpoint);

        Ok(body)
    }
}
