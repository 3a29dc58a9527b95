//! Configuration factory: the in-process hook point for installation.

use arc_swap::ArcSwapOption;
use std::sync::Arc;

use crate::client::config::TransportConfig;
use crate::install::{ConfigHook, InstallError};

/// Decorates every newly created transport configuration.
pub struct ConfigDecorator {
    inner: Box<dyn Fn(&mut TransportConfig) + Send + Sync>,
}

impl ConfigDecorator {
    pub fn new(f: impl Fn(&mut TransportConfig) + Send + Sync + 'static) -> Self {
        Self { inner: Box::new(f) }
    }

    pub fn apply(&self, config: &mut TransportConfig) {
        (self.inner)(config)
    }
}

/// Creates transport configurations, applying the installed decorator to
/// every one it hands out.
///
/// The decorator slot is an atomic swap, so installation flips on and off
/// without blocking configuration creation on other threads.
pub struct ConfigFactory {
    template: TransportConfig,
    decorator: ArcSwapOption<ConfigDecorator>,
}

impl ConfigFactory {
    pub fn new() -> Self {
        Self::with_template(TransportConfig::default())
    }

    /// Factory whose configurations start from `template`.
    pub fn with_template(template: TransportConfig) -> Self {
        Self {
            template,
            decorator: ArcSwapOption::empty(),
        }
    }

    /// New configuration; decorated when monitoring is installed.
    pub fn make_config(&self) -> TransportConfig {
        let mut config = self.template.clone();
        if let Some(decorator) = self.decorator.load_full() {
            decorator.apply(&mut config);
        }
        config
    }
}

impl Default for ConfigFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigHook for ConfigFactory {
    fn set_decorator(&self, decorator: Option<Arc<ConfigDecorator>>) -> Result<(), InstallError> {
        self.decorator.store(decorator);
        Ok(())
    }
}
