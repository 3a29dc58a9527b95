//! Hook capability for decorating new transport configurations.

use std::sync::Arc;

use crate::client::ConfigDecorator;

/// Error raised while binding the configuration hook point.
#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("failed to hook transport configuration factory: {0}")]
    Hook(String),
}

/// A hook point that lets the core wrap every newly created transport
/// configuration.
///
/// Host-specific bindings supply the mechanism; `ConfigFactory` is the
/// in-process binding.
pub trait ConfigHook: Send + Sync {
    /// Arrange for `decorator` to run on every subsequently created
    /// configuration, or clear the arrangement with `None`.
    fn set_decorator(&self, decorator: Option<Arc<ConfigDecorator>>) -> Result<(), InstallError>;
}
