//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A required configuration section is missing required fields.
    #[error("configuration section '{section}' is not configured (missing required fields)")]
    NotConfigured { section: String },
}
