//! # grn-config
//!
//! Layered configuration loading for Greenroom using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GRN_*` prefix, `__` as separator)
//! 2. Project-level `.greenroom/config.toml`
//! 3. User-level `~/.config/greenroom/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GRN_GITHUB__TOKEN` -> `github.token`,
//! `GRN_REGISTRY__BASE_URL` -> `registry.base_url`, etc. The `__` (double
//! underscore) separates nested config sections.

mod error;
mod github;
mod registry;

pub use error::ConfigError;
pub use github::GithubConfig;
pub use registry::RegistryConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GreenroomConfig {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
}

impl GreenroomConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables).
    ///
    /// Does NOT call `dotenvy`; use [`GreenroomConfig::load_with_dotenv`]
    /// if `.env` loading is wanted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source fails to parse or
    /// merge.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support. This is the CLI entry
    /// point.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source fails to parse or
    /// merge.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain. Public so tests can layer extra
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".greenroom/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("GRN_").split("__"))
    }

    /// The GitHub section, or [`ConfigError::NotConfigured`] when fields a
    /// snapshot fetch needs are missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] for an incomplete section.
    pub fn require_github(&self) -> Result<&GithubConfig, ConfigError> {
        if self.github.is_configured() {
            Ok(&self.github)
        } else {
            Err(ConfigError::NotConfigured { section: "github".to_string() })
        }
    }

    /// The registry section, or [`ConfigError::NotConfigured`] when the
    /// base URL is missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] for an incomplete section.
    pub fn require_registry(&self) -> Result<&RegistryConfig, ConfigError> {
        if self.registry.is_configured() {
            Ok(&self.registry)
        } else {
            Err(ConfigError::NotConfigured { section: "registry".to_string() })
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("greenroom").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_loads() {
        let config = GreenroomConfig::default();
        assert!(!config.github.is_configured());
        assert!(!config.registry.is_configured());
        assert!(config.require_github().is_err());
    }

    #[test]
    fn file_then_env_precedence() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir(".greenroom")?;
            jail.create_file(
                ".greenroom/config.toml",
                r#"
                    [github]
                    token = "from-file"
                    owner = "example"
                    repo = "sessions-123"
                    project_number = 9

                    [registry]
                    base_url = "https://registry.example.org"
                "#,
            )?;
            jail.set_env("GRN_GITHUB__TOKEN", "from-env");

            let config: GreenroomConfig = GreenroomConfig::figment().extract()?;
            assert_eq!(config.github.token, "from-env");
            assert_eq!(config.github.owner, "example");
            assert_eq!(config.github.project_number, 9);
            assert!(config.require_github().is_ok());
            assert_eq!(config.registry.base_url, "https://registry.example.org");
            Ok(())
        });
    }

    #[test]
    fn env_alone_configures_a_section() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("GRN_REGISTRY__BASE_URL", "https://registry.example.org");
            jail.set_env("GRN_REGISTRY__TOKEN", "secret");

            let config: GreenroomConfig = GreenroomConfig::figment().extract()?;
            assert!(config.require_registry().is_ok());
            assert_eq!(config.registry.bearer_token().as_deref(), Some("secret"));
            Ok(())
        });
    }
}
