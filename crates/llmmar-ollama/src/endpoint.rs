//! Server endpoint resolution.

use std::fmt;

/// Port the Ollama server listens on.
pub const OLLAMA_PORT: u16 = 11434;

/// Resolved host/port pair used to reach the inference server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    port: u16,
}

impl Endpoint {
    /// Build an endpoint from a stored host string.
    ///
    /// Returns `None` when the host is empty: an unset host is never dialed.
    pub fn from_host(host: &str) -> Option<Self> {
        Self::with_port(host, OLLAMA_PORT)
    }

    /// Build an endpoint on a non-default port.
    pub fn with_port(host: &str, port: u16) -> Option<Self> {
        let host = host.trim();
        if host.is_empty() {
            return None;
        }
        Some(Self {
            host: host.to_string(),
            port,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// `http://{host}:{port}`
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// URL of the model listing endpoint, used as the reachability probe.
    pub fn tags_url(&self) -> String {
        format!("{}/api/tags", self.base_url())
    }

    /// URL of the generate endpoint.
    pub fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
