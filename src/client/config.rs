//! Transport configuration: the recipe for building a client.

use std::sync::Arc;
use std::time::Duration;

use crate::config::InterceptConfig;
use crate::intercept::Interceptor;

/// Ordered handler list plus transport knobs.
///
/// Configurations are values: cloning one shares its handlers but later
/// mutations are local, so installation never retroactively affects
/// configurations created earlier.
#[derive(Clone)]
pub struct TransportConfig {
    handlers: Vec<Arc<Interceptor>>,
    max_redirects: usize,
    request_timeout: Option<Duration>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
            max_redirects: 10,
            request_timeout: None,
        }
    }
}

impl TransportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with knobs taken from the monitor config.
    pub fn from_intercept(config: &InterceptConfig) -> Self {
        Self {
            handlers: Vec::new(),
            max_redirects: config.max_redirects,
            request_timeout: None,
        }
    }

    /// Append `handler` unless this configuration already carries it.
    pub fn push_handler(&mut self, handler: Arc<Interceptor>) {
        if self.handlers.iter().any(|h| Arc::ptr_eq(h, &handler)) {
            tracing::debug!("Interceptor already present in configuration");
            return;
        }
        self.handlers.push(handler);
    }

    pub fn handlers(&self) -> &[Arc<Interceptor>] {
        &self.handlers
    }

    /// Copy of this configuration with every handler removed.
    ///
    /// The interceptor executes exchanges against a stripped copy so the
    /// outgoing call cannot be re-intercepted.
    pub fn strip_handlers(&self) -> Self {
        Self {
            handlers: Vec::new(),
            ..self.clone()
        }
    }

    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    pub fn set_max_redirects(&mut self, max_redirects: usize) {
        self.max_redirects = max_redirects;
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    pub fn set_request_timeout(&mut self, timeout: Option<Duration>) {
        self.request_timeout = timeout;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::Correlator;
    use crate::store::LogStore;

    fn interceptor() -> (Arc<Interceptor>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(LogStore::open(dir.path().join("network_logs.json")));
        let correlator = Arc::new(Correlator::new(store));
        (Arc::new(Interceptor::new(correlator)), dir)
    }

    #[test]
    fn test_push_handler_is_deduplicated() {
        let (handler, _dir) = interceptor();
        let mut config = TransportConfig::new();

        config.push_handler(handler.clone());
        config.push_handler(handler);
        assert_eq!(config.handlers().len(), 1);
    }

    #[test]
    fn test_strip_handlers_keeps_knobs() {
        let (handler, _dir) = interceptor();
        let mut config = TransportConfig::new();
        config.set_max_redirects(3);
        config.push_handler(handler);

        let clean = config.strip_handlers();
        assert!(clean.handlers().is_empty());
        assert_eq!(clean.max_redirects(), 3);
        // The original is untouched.
        assert_eq!(config.handlers().len(), 1);
    }
}
