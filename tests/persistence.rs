//! Persistence round-trip tests for the connection log.

use std::net::SocketAddr;
use std::time::Duration;

use netwatch::intercept::NoopDelegate;
use netwatch::store::{ConnectionLogRecord, LogStore};

mod common;
use common::{get, start_monitor};

#[tokio::test]
async fn test_records_survive_reload() {
    let backend_addr: SocketAddr = "127.0.0.1:28291".parse().unwrap();
    common::start_mock_backend(backend_addr, "ok").await;

    let harness = start_monitor();
    let client = harness.client();
    let url = format!("http://{}/", backend_addr);

    let mut delegate = NoopDelegate;
    client.request(get(&url), &mut delegate).await.unwrap();

    let in_memory = harness.monitor.get_all_logs().await;
    assert_eq!(in_memory.len(), 1);

    // A fresh store over the same file sees identical records.
    let reloaded = LogStore::open(harness.monitor.store().path());
    assert_eq!(reloaded.get_all(), in_memory);
}

#[tokio::test]
async fn test_file_decodes_to_records_in_completion_order() {
    let backend_addr: SocketAddr = "127.0.0.1:28292".parse().unwrap();
    common::start_mock_backend(backend_addr, "ok").await;

    let harness = start_monitor();
    let client = harness.client();

    for path in ["first", "second", "third"] {
        let url = format!("http://{}/{}", backend_addr, path);
        let mut delegate = NoopDelegate;
        client.request(get(&url), &mut delegate).await.unwrap();
    }

    let contents = std::fs::read_to_string(harness.monitor.store().path()).unwrap();
    let decoded: Vec<ConnectionLogRecord> = serde_json::from_str(&contents).unwrap();
    let paths: Vec<_> = decoded
        .iter()
        .map(|r| r.initial_url.rsplit('/').next().unwrap().to_string())
        .collect();
    assert_eq!(paths, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_clear_all_logs_empties_store_and_file() {
    let backend_addr: SocketAddr = "127.0.0.1:28293".parse().unwrap();
    common::start_mock_backend(backend_addr, "ok").await;

    let harness = start_monitor();
    let client = harness.client();
    let url = format!("http://{}/", backend_addr);

    let mut delegate = NoopDelegate;
    client.request(get(&url), &mut delegate).await.unwrap();
    assert_eq!(harness.monitor.get_all_logs().await.len(), 1);

    harness.monitor.clear_all_logs();
    tokio::time::sleep(Duration::from_millis(300)).await;

    assert!(harness.monitor.get_all_logs().await.is_empty());

    let contents = std::fs::read_to_string(harness.monitor.store().path()).unwrap();
    let decoded: Vec<ConnectionLogRecord> = serde_json::from_str(&contents).unwrap();
    assert!(decoded.is_empty());
}
