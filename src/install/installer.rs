//! Idempotent installation of the interceptor into new configurations.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::client::ConfigDecorator;
use crate::install::hook::ConfigHook;
use crate::intercept::Interceptor;

/// Arranges that every new transport configuration includes the
/// interceptor.
///
/// Configurations created before `install` (or after `uninstall`) are
/// unaffected.
pub struct Installer {
    hook: Arc<dyn ConfigHook>,
    interceptor: Arc<Interceptor>,
    installed: AtomicBool,
}

impl Installer {
    pub fn new(hook: Arc<dyn ConfigHook>, interceptor: Arc<Interceptor>) -> Self {
        Self {
            hook,
            interceptor,
            installed: AtomicBool::new(false),
        }
    }

    /// Begin decorating new configurations. No-op when already installed.
    ///
    /// A hook failure is logged and leaves monitoring inactive; it never
    /// propagates to the host.
    pub fn install(&self) {
        if self.installed.swap(true, Ordering::SeqCst) {
            tracing::debug!("Already monitoring");
            return;
        }

        let interceptor = self.interceptor.clone();
        let decorator = Arc::new(ConfigDecorator::new(move |config| {
            config.push_handler(interceptor.clone());
        }));

        if let Err(e) = self.hook.set_decorator(Some(decorator)) {
            self.installed.store(false, Ordering::SeqCst);
            tracing::error!(error = %e, "Failed to install interceptor, monitoring inactive");
            return;
        }
        tracing::info!("Started monitoring");
    }

    /// Stop decorating new configurations. No-op when not installed.
    pub fn uninstall(&self) {
        if !self.installed.swap(false, Ordering::SeqCst) {
            return;
        }
        if let Err(e) = self.hook.set_decorator(None) {
            tracing::error!(error = %e, "Failed to uninstall interceptor");
            return;
        }
        tracing::info!("Stopped monitoring");
    }

    pub fn is_installed(&self) -> bool {
        self.installed.load(Ordering::SeqCst)
    }
}
