//! Transparent observer for outbound HTTP(S) exchanges.
//!
//! Every exchange issued through a monitored transport configuration is
//! measured and recorded in a durable connection log, without call sites
//! opting in individually.
//!
//! ```text
//! Installer ──ensures──▶ new TransportConfig carries the Interceptor
//!
//! caller ──▶ MonitoredClient::request
//!              │ should_handle? ──no──▶ direct drive ─────▶ Transport
//!              └─yes──▶ Interceptor::execute
//!                         ├─ on_start ──▶ Correlator (in-flight table)
//!                         ├─ drive (tagged, handler-free config) ──▶ Transport
//!                         │    └─ events relayed verbatim ──▶ ExchangeDelegate
//!                         └─ on_finish ──▶ Correlator ──▶ LogStore (JSON file)
//! ```

pub mod client;
pub mod config;
pub mod install;
pub mod intercept;
pub mod monitor;
pub mod observability;
pub mod store;

pub use client::{ConfigFactory, MonitoredClient, TransportConfig};
pub use config::MonitorConfig;
pub use install::{ConfigHook, Installer};
pub use intercept::{
    ExchangeDelegate, HyperTransport, InterceptError, Interceptor, RequestBody, Transport,
};
pub use monitor::{Correlator, NetworkMonitor};
pub use store::{ConnectionLogRecord, LogStore};
