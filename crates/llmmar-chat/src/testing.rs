//! In-process stand-in for the Ollama server.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use llmmar_ollama::{Endpoint, GenerateRequest, OllamaApi, OllamaError, ServerStatus};
use tokio::sync::Notify;

type Responder = Box<dyn Fn(&GenerateRequest) -> Result<String, OllamaError> + Send + Sync>;

/// Counts calls and answers from a closure.
pub(crate) struct FakeApi {
    status: ServerStatus,
    responder: Responder,
    probe_gate: Option<Arc<Notify>>,
    delay: Box<dyn Fn(&GenerateRequest) -> Duration + Send + Sync>,
    probes: AtomicUsize,
    generates: AtomicUsize,
    last_request: std::sync::Mutex<Option<GenerateRequest>>,
}

impl FakeApi {
    pub fn new(
        status: ServerStatus,
        responder: impl Fn(&GenerateRequest) -> Result<String, OllamaError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            status,
            responder: Box::new(responder),
            probe_gate: None,
            delay: Box::new(|_| Duration::ZERO),
            probes: AtomicUsize::new(0),
            generates: AtomicUsize::new(0),
            last_request: std::sync::Mutex::new(None),
        }
    }

    /// Online server answering every prompt with `body`.
    pub fn answering(body: &'static str) -> Self {
        Self::new(ServerStatus::Online, move |_| Ok(body.to_string()))
    }

    /// Server that cannot be reached.
    pub fn unreachable() -> Self {
        Self::new(ServerStatus::Offline, |_| {
            Err(OllamaError::Unreachable("http://10.0.0.9:11434".to_string()))
        })
    }

    /// Hold every probe until the gate is notified.
    pub fn with_probe_gate(mut self, gate: Arc<Notify>) -> Self {
        self.probe_gate = Some(gate);
        self
    }

    pub fn with_delay(
        mut self,
        delay: impl Fn(&GenerateRequest) -> Duration + Send + Sync + 'static,
    ) -> Self {
        self.delay = Box::new(delay);
        self
    }

    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }

    pub fn generate_count(&self) -> usize {
        self.generates.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<GenerateRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl OllamaApi for FakeApi {
    async fn probe(&self, endpoint: Option<&Endpoint>) -> ServerStatus {
        if endpoint.is_none() {
            return ServerStatus::Offline;
        }
        self.probes.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.probe_gate {
            gate.notified().await;
        }
        self.status
    }

    async fn generate(
        &self,
        _endpoint: &Endpoint,
        request: &GenerateRequest,
    ) -> Result<String, OllamaError> {
        self.generates.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        let delay = (self.delay)(request);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        (self.responder)(request)
    }
}
