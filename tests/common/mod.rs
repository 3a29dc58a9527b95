//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use http::response::Parts;
use http::{Method, Request, StatusCode};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;

use netwatch::client::{ConfigFactory, MonitoredClient, TransportConfig};
use netwatch::config::MonitorConfig;
use netwatch::intercept::{ExchangeDelegate, HyperTransport, RequestBody, Transport};
use netwatch::monitor::NetworkMonitor;

/// Start a simple mock backend that returns a fixed 200 response.
#[allow(dead_code)]
pub async fn start_mock_backend(addr: SocketAddr, response: &'static str) {
    start_programmable_backend(addr, move || async move { (200, response.to_string()) }).await;
}

/// Start a programmable mock backend with async support.
#[allow(dead_code)]
pub async fn start_programmable_backend<F, Fut>(addr: SocketAddr, f: F)
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await.unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let mut buf = [0u8; 4096];
                        let _ = socket.read(&mut buf).await;

                        let (status, body) = f().await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
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
                Err(_) => break,
            }
        }
    });
}

/// Start a backend that answers every request with a 302 to `location`.
#[allow(dead_code)]
pub async fn start_redirecting_backend(addr: SocketAddr, location: String) {
    let listener = TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let location = location.clone();
                    tokio::spawn(async move {
                        let mut buf = [0u8; 4096];
                        let _ = socket.read(&mut buf).await;

                        let response_str = format!(
                            "HTTP/1.1 302 Found\r\nLocation: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                            location
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}

/// Start a backend that accepts connections and never responds.
#[allow(dead_code)]
pub async fn start_hanging_backend(addr: SocketAddr) {
    let listener = TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let mut buf = [0u8; 4096];
                        let _ = socket.read(&mut buf).await;
                        tokio::time::sleep(Duration::from_secs(600)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}

/// A monitor wired to a config factory over a temp-dir store, started.
pub struct TestMonitor {
    pub monitor: NetworkMonitor,
    pub factory: Arc<ConfigFactory>,
    pub transport: Arc<dyn Transport>,
    _dir: tempfile::TempDir,
}

impl TestMonitor {
    /// Client built from a freshly decorated configuration.
    #[allow(dead_code)]
    pub fn client(&self) -> MonitoredClient {
        MonitoredClient::new(self.factory.make_config(), self.transport.clone())
    }
}

#[allow(dead_code)]
pub fn start_monitor() -> TestMonitor {
    let dir = tempfile::tempdir().unwrap();
    let mut config = MonitorConfig::default();
    config.storage.directory = dir.path().to_string_lossy().into_owned();

    let factory = Arc::new(ConfigFactory::with_template(TransportConfig::from_intercept(
        &config.intercept,
    )));
    let monitor = NetworkMonitor::new(&config, factory.clone());
    monitor.start();

    TestMonitor {
        monitor,
        factory,
        transport: Arc::new(HyperTransport::new()),
        _dir: dir,
    }
}

/// GET request with an empty body.
#[allow(dead_code)]
pub fn get(url: &str) -> Request<RequestBody> {
    Request::builder()
        .method(Method::GET)
        .uri(url)
        .body(RequestBody::Empty)
        .unwrap()
}

/// Delegate that records every relayed event.
#[derive(Default)]
#[allow(dead_code)]
pub struct CollectingDelegate {
    pub statuses: Vec<StatusCode>,
    pub chunks: Vec<Bytes>,
    pub redirects: Vec<(Url, Url, StatusCode)>,
}

impl CollectingDelegate {
    #[allow(dead_code)]
    pub fn body(&self) -> Vec<u8> {
        self.chunks.iter().flat_map(|c| c.iter().copied()).collect()
    }
}

impl ExchangeDelegate for CollectingDelegate {
    fn on_response(&mut self, head: &Parts) {
        self.statuses.push(head.status);
    }

    fn on_chunk(&mut self, chunk: Bytes) {
        self.chunks.push(chunk);
    }

    fn on_redirect(&mut self, from: &Url, to: &Url, status: StatusCode) {
        self.redirects.push((from.clone(), to.clone(), status));
    }
}
