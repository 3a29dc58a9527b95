//! Transport configurations and client-side dispatch.
//!
//! # Data Flow
//! ```text
//! ConfigFactory::make_config
//!     → template clone
//!     → installed decorator runs (pushes the interceptor when monitoring)
//!     → TransportConfig
//!
//! MonitoredClient::request
//!     → first handler claiming the request observes it
//!     → otherwise the request goes straight to the transport
//! ```

pub mod client;
pub mod config;
pub mod factory;

pub use client::MonitoredClient;
pub use config::TransportConfig;
pub use factory::{ConfigDecorator, ConfigFactory};
