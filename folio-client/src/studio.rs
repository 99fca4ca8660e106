//! Studio configuration, read from `studio.toml`.
//!
//! ```toml
//! project_id = "mq8wsgus"
//! dataset = "production"
//! types = ["home", "project"]
//! ```

use crate::config::{ApiVersion, ClientConfig, DEFAULT_DATASET};
use crate::error::ConfigResult;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Workspace-level studio settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_title")]
    pub title: String,
    pub project_id: String,
    #[serde(default = "default_dataset")]
    pub dataset: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<ApiVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_cdn: Option<bool>,
    /// Document types enabled in this studio, in display order.
    #[serde(default = "default_types")]
    pub types: Vec<String>,
}

fn default_name() -> String {
    "default".to_string()
}

fn default_title() -> String {
    "My Personal Profile".to_string()
}

fn default_dataset() -> String {
    DEFAULT_DATASET.to_string()
}

fn default_types() -> Vec<String> {
    vec!["home".to_string(), "project".to_string()]
}

impl StudioConfig {
    pub fn new(project_id: &str) -> Self {
        Self {
            name: default_name(),
            title: default_title(),
            project_id: project_id.into(),
            dataset: default_dataset(),
            api_version: None,
            use_cdn: None,
            types: default_types(),
        }
    }

    /// Parses and checks a studio config.
    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(contents)?;
        config.client_config().validate()?;
        Ok(config)
    }

    /// Loads a studio config from disk.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        info!(
            path = %path.display(),
            project_id = %config.project_id,
            dataset = %config.dataset,
            "Loaded studio config"
        );
        Ok(config)
    }

    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Client configuration for the studio's project and dataset.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            project_id: self.project_id.clone(),
            dataset: Some(self.dataset.clone()),
            api_version: self.api_version,
            use_cdn: self.use_cdn,
        }
    }
}
