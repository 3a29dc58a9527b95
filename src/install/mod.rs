//! Installation boundary.
//!
//! # Design Decisions
//! - The core never assumes how the hook is wired; `ConfigHook` is a
//!   capability supplied by the host binding (`ConfigFactory` in-process)
//! - Install/uninstall are idempotent and never retroactive: only
//!   configurations created while installed carry the interceptor
//! - A hook failure leaves monitoring inactive and is logged; it never
//!   crashes the host

pub mod hook;
pub mod installer;

pub use hook::{ConfigHook, InstallError};
pub use installer::Installer;
