//! Shared mock backends for integration tests.

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, HeaderName, Method, StatusCode, Uri};
use axum::Router;
use serde_json::Value;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use url::Url;

use frontend::api::{ApiClient, ApiError, Observer};

/// Requests seen by a recording backend.
#[derive(Default)]
pub struct Recorder {
    requests: Mutex<Vec<(Method, String)>>,
}

impl Recorder {
    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<(Method, String)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

type RecordState = (Arc<Recorder>, StatusCode, &'static str);

async fn record(
    State((recorder, status, body)): State<RecordState>,
    method: Method,
    uri: Uri,
) -> (StatusCode, [(HeaderName, &'static str); 1], &'static str) {
    recorder
        .requests
        .lock()
        .unwrap()
        .push((method, uri.path().to_string()));
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

/// Start an axum backend that answers every request with `status` and
/// `body`, recording method and path.
pub async fn start_recording_backend(
    status: StatusCode,
    body: &'static str,
) -> (SocketAddr, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    let app = Router::new()
        .fallback(record)
        .with_state((recorder.clone(), status, body));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (addr, recorder)
}

/// Start a raw TCP backend whose response is produced by `f`, counting
/// accepted connections.
#[allow(dead_code)]
pub async fn start_programmable_backend<F, Fut>(f: F) -> (SocketAddr, Arc<AtomicU32>)
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicU32::new(0));
    let counter = hits.clone();
    let f = Arc::new(f);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            let f = f.clone();
            tokio::spawn(async move {
                let (status, body) = f().await;
                let status_text = match status {
                    200 => "200 OK",
                    404 => "404 Not Found",
                    500 => "500 Internal Server Error",
                    503 => "503 Service Unavailable",
                    _ => "200 OK",
                };

                let response_str = format!(
                    "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_text,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response_str.as_bytes()).await;
                let _ = socket.shutdown().await;
                tokio::time::sleep(Duration::from_millis(10)).await;
            });
        }
    });

    (addr, hits)
}

/// An address nothing listens on.
#[allow(dead_code)]
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

pub fn client_for(addr: SocketAddr) -> ApiClient {
    let http = reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    ApiClient::new(http, Url::parse(&format!("http://{}", addr)).unwrap())
}

/// Outcome delivered to a [`ChannelObserver`].
#[allow(dead_code)]
#[derive(Debug)]
pub enum Outcome {
    Next(Value),
    Error(ApiError),
}

/// Observer that forwards its outcome into a channel.
#[allow(dead_code)]
pub struct ChannelObserver(pub mpsc::UnboundedSender<Outcome>);

impl Observer for ChannelObserver {
    fn next(self, value: Value) {
        let _ = self.0.send(Outcome::Next(value));
    }

    fn error(self, err: ApiError) {
        let _ = self.0.send(Outcome::Error(err));
    }
}

/// In-memory sink for formatted log lines.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)]
impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Route this thread's log events into a buffer while the guard lives.
///
/// Only reliable on the current-thread runtime `#[tokio::test]` uses by
/// default, where spawned tasks run on the test thread.
#[allow(dead_code)]
pub fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();

    (buffer, tracing::subscriber::set_default(subscriber))
}
