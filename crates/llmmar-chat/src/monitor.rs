//! Server reachability tracking.

use std::sync::Arc;

use llmmar_ollama::{Endpoint, OllamaApi, ServerStatus};
use tokio::sync::watch;
use tracing::info;

/// Holds the last known [`ServerStatus`] and publishes every change.
///
/// Probes only happen on [`refresh`](Self::refresh); there is no polling.
pub struct ConnectionMonitor {
    api: Arc<dyn OllamaApi>,
    status: watch::Sender<ServerStatus>,
}

impl ConnectionMonitor {
    /// Starts in [`ServerStatus::Checking`].
    pub fn new(api: Arc<dyn OllamaApi>) -> Self {
        let (status, _) = watch::channel(ServerStatus::Checking);
        Self { api, status }
    }

    pub fn status(&self) -> ServerStatus {
        *self.status.borrow()
    }

    /// Receive every status change.
    pub fn subscribe(&self) -> watch::Receiver<ServerStatus> {
        self.status.subscribe()
    }

    /// Re-probe the server: publishes `Checking`, then the probe result.
    pub async fn refresh(&self, endpoint: Option<&Endpoint>) -> ServerStatus {
        self.status.send_replace(ServerStatus::Checking);
        let status = self.api.probe(endpoint).await;
        self.status.send_replace(status);

        match endpoint {
            Some(endpoint) => info!("Server {} is {}", endpoint, status),
            None => info!("No server configured"),
        }
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeApi;
    use tokio::sync::Notify;

    #[tokio::test]
    async fn test_starts_checking() {
        let monitor = ConnectionMonitor::new(Arc::new(FakeApi::answering("")));
        assert_eq!(monitor.status(), ServerStatus::Checking);
    }

    #[tokio::test]
    async fn test_missing_host_is_offline_without_probe() {
        let api = Arc::new(FakeApi::answering(""));
        let monitor = ConnectionMonitor::new(api.clone());

        assert_eq!(monitor.refresh(None).await, ServerStatus::Offline);
        assert_eq!(monitor.status(), ServerStatus::Offline);
        assert_eq!(api.probe_count(), 0);
    }

    #[tokio::test]
    async fn test_each_refresh_probes_once() {
        let api = Arc::new(FakeApi::unreachable());
        let monitor = ConnectionMonitor::new(api.clone());
        let endpoint = Endpoint::from_host("10.0.0.9");

        assert_eq!(monitor.refresh(endpoint.as_ref()).await, ServerStatus::Offline);
        assert_eq!(monitor.refresh(endpoint.as_ref()).await, ServerStatus::Offline);
        assert_eq!(api.probe_count(), 2);
    }

    #[tokio::test]
    async fn test_publishes_checking_before_result() {
        let gate = Arc::new(Notify::new());
        let api = Arc::new(FakeApi::answering("").with_probe_gate(gate.clone()));
        let monitor = Arc::new(ConnectionMonitor::new(api));
        monitor.refresh(None).await;

        let mut updates = monitor.subscribe();
        assert_eq!(*updates.borrow_and_update(), ServerStatus::Offline);

        let task = {
            let monitor = Arc::clone(&monitor);
            tokio::spawn(async move {
                let endpoint = Endpoint::from_host("10.0.0.9");
                monitor.refresh(endpoint.as_ref()).await
            })
        };

        updates.changed().await.unwrap();
        assert_eq!(*updates.borrow_and_update(), ServerStatus::Checking);

        gate.notify_one();
        assert_eq!(task.await.unwrap(), ServerStatus::Online);
        assert_eq!(monitor.status(), ServerStatus::Online);
    }
}
