//! Client configuration.

use std::time::Duration;

/// Default bound on a reachability probe.
const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for the Ollama client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Upper bound on a probe request (None = transport default)
    pub probe_timeout: Option<Duration>,
    /// Upper bound on a generate request (None = transport default)
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            probe_timeout: Some(DEFAULT_PROBE_TIMEOUT),
            // Generation can legitimately take minutes on small devices
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Create config from environment variables.
    ///
    /// `LLMMAR_PROBE_TIMEOUT_SECS` and `LLMMAR_REQUEST_TIMEOUT_SECS` override
    /// the defaults; `0` disables the bound.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let probe_timeout = secs_from_env("LLMMAR_PROBE_TIMEOUT_SECS")
            .unwrap_or(defaults.probe_timeout);
        let request_timeout = secs_from_env("LLMMAR_REQUEST_TIMEOUT_SECS")
            .unwrap_or(defaults.request_timeout);

        Self {
            probe_timeout,
            request_timeout,
        }
    }

    /// Create a builder for configuration.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

fn secs_from_env(var: &str) -> Option<Option<Duration>> {
    let secs: u64 = std::env::var(var).ok()?.trim().parse().ok()?;
    Some(parse_timeout(secs))
}

fn parse_timeout(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

/// Builder for client configuration.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn probe_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.probe_timeout = timeout;
        self
    }

    pub fn request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}
