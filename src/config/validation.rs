//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges and restricted fields
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function over MonitorConfig
//! - Runs before config is accepted into the system

use crate::config::schema::MonitorConfig;

/// A single semantic validation failure.
#[derive(Debug, PartialEq)]
pub enum ValidationError {
    EmptySchemes,
    UnsupportedScheme(String),
    EmptyFileName,
    FileNameHasSeparators(String),
    RedirectCapTooLarge(usize),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptySchemes => write!(f, "intercept.schemes must not be empty"),
            ValidationError::UnsupportedScheme(s) => {
                write!(f, "unsupported scheme '{}' (only http/https)", s)
            }
            ValidationError::EmptyFileName => write!(f, "storage.file_name must not be empty"),
            ValidationError::FileNameHasSeparators(s) => {
                write!(f, "storage.file_name '{}' must not contain path separators", s)
            }
            ValidationError::RedirectCapTooLarge(n) => {
                write!(f, "intercept.max_redirects {} exceeds the cap of 32", n)
            }
        }
    }
}

/// Semantic checks; returns every failure, not just the first.
pub fn validate_config(config: &MonitorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.intercept.schemes.is_empty() {
        errors.push(ValidationError::EmptySchemes);
    }
    for scheme in &config.intercept.schemes {
        if scheme != "http" && scheme != "https" {
            errors.push(ValidationError::UnsupportedScheme(scheme.clone()));
        }
    }

    if config.storage.file_name.is_empty() {
        errors.push(ValidationError::EmptyFileName);
    } else if config.storage.file_name.contains(['/', '\\']) {
        errors.push(ValidationError::FileNameHasSeparators(
            config.storage.file_name.clone(),
        ));
    }

    if config.intercept.max_redirects > 32 {
        errors.push(ValidationError::RedirectCapTooLarge(
            config.intercept.max_redirects,
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
