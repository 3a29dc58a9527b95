//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MonitorConfig (validated, immutable)
//!     → shared by the composition root with all subsystems
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults so a missing file or empty table works
//! - Validation separates syntactic (serde) from semantic checks and
//!   returns every failure, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{InterceptConfig, MonitorConfig, ObservabilityConfig, StorageConfig};
pub use validation::{validate_config, ValidationError};
