//! Configuration types for the Folio bookstore client.
//!
//! Configuration is loaded from a single YAML file (`folio.yaml`). Every
//! section is optional and falls back to defaults that talk to a gateway on
//! `http://localhost:9090`.
//!
//! # Sections
//!
//! - **gateway**: base URL of the API gateway and request timeout
//! - **session**: where the command-line front end persists its session
//! - **catalog**: default page sizes for listings

pub mod catalog;
pub mod gateway;
pub mod session;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub use catalog::CatalogConfig;
pub use gateway::GatewayConfig;
pub use session::SessionConfig;

/// Complete Folio configuration loaded from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolioConfig {
    /// API gateway connection.
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Session persistence.
    #[serde(default)]
    pub session: SessionConfig,

    /// Listing defaults.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FolioConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file if it exists, otherwise return defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.gateway.base_url.trim().is_empty() {
            return Err(ConfigError::Config("gateway.base_url must not be empty".into()));
        }
        if self.catalog.page_size == 0 {
            return Err(ConfigError::Config("catalog.page_size must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = FolioConfig::from_yaml("{}").unwrap();
        assert_eq!(config.gateway.base_url, "http://localhost:9090");
        assert_eq!(config.gateway.timeout_secs, 30);
        assert_eq!(config.catalog.page_size, 9);
        assert_eq!(config.catalog.category_page_size, 100);
    }

    #[test]
    fn test_partial_yaml_overrides() {
        let yaml = r#"
gateway:
  base_url: https://books.example.com/
catalog:
  page_size: 18
"#;
        let config = FolioConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.gateway.base_url, "https://books.example.com/");
        assert_eq!(config.catalog.page_size, 18);
        assert_eq!(config.catalog.review_page_size, 10);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = FolioConfig::from_yaml("catalog:\n  page_size: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Config(_)));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = FolioConfig::load_or_default(dir.path().join("folio.yaml")).unwrap();
        assert_eq!(config.session.file.to_string_lossy(), ".folio/session.json");
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "session:\n  file: /tmp/folio-session.json").unwrap();

        let config = FolioConfig::from_file(&path).unwrap();
        assert_eq!(config.session.file.to_string_lossy(), "/tmp/folio-session.json");
    }
}
