//! Monitor facade: composition-root entry point and query boundary.

use std::sync::Arc;

use crate::config::MonitorConfig;
use crate::install::{ConfigHook, Installer};
use crate::intercept::Interceptor;
use crate::monitor::Correlator;
use crate::store::{ConnectionLogRecord, LogStore};

/// Bundles the correlator, the store, and the installer glue.
///
/// Constructed explicitly by the host's composition root; holds no ambient
/// global state.
pub struct NetworkMonitor {
    store: Arc<LogStore>,
    correlator: Arc<Correlator>,
    interceptor: Arc<Interceptor>,
    installer: Installer,
}

impl NetworkMonitor {
    /// Build the monitor from `config`, binding `hook` as the installation
    /// point for new transport configurations.
    pub fn new(config: &MonitorConfig, hook: Arc<dyn ConfigHook>) -> Self {
        let store = Arc::new(LogStore::open(config.storage.path()));
        let correlator = Arc::new(Correlator::new(store.clone()));
        let interceptor = Arc::new(Interceptor::with_schemes(
            correlator.clone(),
            config.intercept.schemes.clone(),
        ));
        let installer = Installer::new(hook, interceptor.clone());
        Self {
            store,
            correlator,
            interceptor,
            installer,
        }
    }

    /// Start monitoring: every configuration created from now on carries
    /// the interceptor. Idempotent.
    pub fn start(&self) {
        self.installer.install();
    }

    /// Stop monitoring. Idempotent; clients built while monitoring keep
    /// their handlers.
    pub fn stop(&self) {
        self.installer.uninstall();
    }

    pub fn is_monitoring(&self) -> bool {
        self.installer.is_installed()
    }

    /// Snapshot of all completed-exchange records, in completion order.
    pub async fn get_all_logs(&self) -> Vec<ConnectionLogRecord> {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.get_all())
            .await
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "Log snapshot task failed");
                Vec::new()
            })
    }

    /// Clear all records, fire-and-forget.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn clear_all_logs(&self) {
        let store = self.store.clone();
        let _ = tokio::task::spawn_blocking(move || store.clear());
    }

    pub fn store(&self) -> Arc<LogStore> {
        self.store.clone()
    }

    pub fn correlator(&self) -> Arc<Correlator> {
        self.correlator.clone()
    }

    pub fn interceptor(&self) -> Arc<Interceptor> {
        self.interceptor.clone()
    }
}
