//! Canned-response HTTP server for exercising the messaging client.
//!
//! The server knows nothing about the messaging API. Tests enqueue [`Stub`]
//! responses, point the client at [`StubServer::url`], and afterwards
//! inspect the captured [`Exchange`]s to assert on the exact method, path,
//! headers, and body the client put on the wire. Stubs are served in FIFO
//! order, one per request; a request with no stub queued answers 500.

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::{Request, State};
use axum::response::Response;
use axum::Router;

/// A canned response waiting to be served.
#[derive(Debug, Clone)]
pub struct Stub {
    pub status: u16,
    pub content_type: String,
    pub body: String,
}

impl Stub {
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Stub {
            status,
            content_type: "application/json".to_string(),
            body: body.into(),
        }
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Stub {
            status,
            content_type: "text/plain".to_string(),
            body: body.into(),
        }
    }
}

/// One request as the server received it.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub method: String,
    /// Path plus query string, exactly as sent.
    pub uri: String,
    pub body: String,
    /// Header names are lowercased.
    pub headers: Vec<(String, String)>,
}

impl Exchange {
    /// Look up a header by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Default)]
struct Inner {
    stubs: VecDeque<Stub>,
    exchanges: Vec<Exchange>,
}

/// Shared queue of pending stubs and log of captured exchanges.
#[derive(Debug, Clone, Default)]
pub struct StubState(Arc<Mutex<Inner>>);

impl StubState {
    pub fn enqueue(&self, stub: Stub) {
        self.0.lock().unwrap().stubs.push_back(stub);
    }

    /// Drain and return everything captured so far.
    pub fn take_exchanges(&self) -> Vec<Exchange> {
        std::mem::take(&mut self.0.lock().unwrap().exchanges)
    }

    fn record(&self, exchange: Exchange) -> Option<Stub> {
        let mut inner = self.0.lock().unwrap();
        inner.exchanges.push(exchange);
        inner.stubs.pop_front()
    }
}

/// Build the router. Every method and path falls through to the capture
/// handler.
pub fn app(state: StubState) -> Router {
    Router::new().fallback(capture).with_state(state)
}

async fn capture(State(state): State<StubState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();
    let headers = parts
        .headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_ascii_lowercase(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let exchange = Exchange {
        method: parts.method.to_string(),
        uri: parts.uri.to_string(),
        body: String::from_utf8_lossy(&bytes).into_owned(),
        headers,
    };

    let stub = state
        .record(exchange)
        .unwrap_or_else(|| Stub::text(500, "no stub queued"));
    Response::builder()
        .status(stub.status)
        .header("Content-Type", stub.content_type)
        .body(Body::from(stub.body))
        .unwrap()
}

pub async fn run(listener: tokio::net::TcpListener, state: StubState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

/// A stub server running on its own thread, bound to an ephemeral port.
/// The thread is detached; the server lives until the process exits, which
/// is the lifetime integration tests need.
pub struct StubServer {
    addr: SocketAddr,
    state: StubState,
}

impl StubServer {
    pub fn start() -> Result<StubServer, std::io::Error> {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        listener.set_nonblocking(true)?;
        let addr = listener.local_addr()?;
        let state = StubState::default();
        let server_state = state.clone();
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build server runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener)
                    .expect("failed to register listener");
                run(listener, server_state).await.expect("server exited");
            });
        });
        Ok(StubServer { addr, state })
    }

    /// Base URL clients should send requests to.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn enqueue(&self, stub: Stub) {
        self.state.enqueue(stub);
    }

    pub fn take_exchanges(&self) -> Vec<Exchange> {
        self.state.take_exchanges()
    }
}
