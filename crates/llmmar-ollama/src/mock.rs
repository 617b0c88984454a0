//! Loopback HTTP server for client tests.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use tokio::net::TcpListener;

/// A request as seen by the mock server.
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

async fn answer(
    State(canned): State<Canned>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    canned.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        headers,
        body,
    });
    (canned.status, canned.body.clone())
}

async fn stall() -> StatusCode {
    std::future::pending::<()>().await;
    StatusCode::OK
}

/// Serves one canned response to every request.
pub(crate) struct MockServer {
    port: u16,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
    pub async fn start(status: u16, body: &str) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let canned = Canned {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
            requests: Arc::clone(&requests),
        };
        let app = Router::new().fallback(answer).with_state(canned);
        let port = serve(app).await;
        Self { port, requests }
    }

    /// Accepts requests and never answers.
    pub async fn silent() -> Self {
        let port = serve(Router::new().fallback(stall)).await;
        Self {
            port,
            requests: Arc::default(),
        }
    }

    /// A loopback port with nothing listening on it.
    pub async fn unused_port() -> u16 {
        let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0))
            .await
            .unwrap();
        listener.local_addr().unwrap().port()
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn serve(app: Router) -> u16 {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0))
        .await
        .unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    port
}
