use crate::error::{ConfigError, ConfigResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dataset read when the caller does not name one.
pub const DEFAULT_DATASET: &str = "production";

/// API version pinned when the caller does not name one.
pub const DEFAULT_API_VERSION: &str = "2024-05-01";

const MAX_DATASET_LEN: usize = 64;

/// A date-stamped content API version (`YYYY-MM-DD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApiVersion(NaiveDate);

impl ApiVersion {
    /// Parses a version tag. A leading `v` is accepted (`v2024-05-01`).
    pub fn parse(s: &str) -> ConfigResult<Self> {
        let tag = s.strip_prefix('v').unwrap_or(s);
        NaiveDate::parse_from_str(tag, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| ConfigError::InvalidApiVersion(s.to_string()))
    }

    #[must_use]
    pub const fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.0
    }

    /// Path segment used in API URLs, e.g. `v2024-05-01`.
    pub fn path_segment(&self) -> String {
        format!("v{self}")
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::parse(DEFAULT_API_VERSION).expect("default API version is a valid date")
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ApiVersion {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ApiVersion> for String {
    fn from(v: ApiVersion) -> Self {
        v.to_string()
    }
}

/// Repository-wide values filled in for anything a [`ClientConfig`] leaves unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDefaults {
    pub dataset: String,
    pub api_version: ApiVersion,
    /// `false` forces fresh reads from the live API.
    pub use_cdn: bool,
}

impl Default for ClientDefaults {
    fn default() -> Self {
        Self {
            dataset: DEFAULT_DATASET.to_string(),
            api_version: ApiVersion::default(),
            use_cdn: false,
        }
    }
}

/// Caller-supplied client configuration.
///
/// Only `project_id` is mandatory. Unset fields are taken from
/// [`ClientDefaults`] when the config is bound into a handle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub project_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<ApiVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_cdn: Option<bool>,
}

impl ClientConfig {
    pub fn new(project_id: &str) -> Self {
        Self {
            project_id: project_id.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: &str) -> Self {
        self.dataset = Some(dataset.into());
        self
    }

    #[must_use]
    pub fn with_api_version(mut self, api_version: ApiVersion) -> Self {
        self.api_version = Some(api_version);
        self
    }

    #[must_use]
    pub fn with_use_cdn(mut self, use_cdn: bool) -> Self {
        self.use_cdn = Some(use_cdn);
        self
    }

    /// Layers `overrides` on top of `self`. Every field set in `overrides`
    /// wins; an empty `project_id` keeps the current one.
    #[must_use]
    pub fn merged(&self, overrides: &ClientConfig) -> ClientConfig {
        ClientConfig {
            project_id: if overrides.project_id.is_empty() {
                self.project_id.clone()
            } else {
                overrides.project_id.clone()
            },
            dataset: overrides.dataset.clone().or_else(|| self.dataset.clone()),
            api_version: overrides.api_version.or(self.api_version),
            use_cdn: overrides.use_cdn.or(self.use_cdn),
        }
    }

    /// Checks identifier syntax. Binding a handle does not require this;
    /// it is run when configuration is loaded from a file.
    pub fn validate(&self) -> ConfigResult<()> {
        let project_ok = !self.project_id.is_empty()
            && self
                .project_id
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !project_ok {
            return Err(ConfigError::InvalidProjectId(self.project_id.clone()));
        }

        if let Some(dataset) = &self.dataset {
            if !is_dataset_name(dataset) {
                return Err(ConfigError::InvalidDataset(dataset.clone()));
            }
        }
        Ok(())
    }
}

/// Lowercase alphanumerics, `_` and `-`, starting alphanumeric, at most 64 chars.
fn is_dataset_name(name: &str) -> bool {
    let valid_char = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit();
    name.len() <= MAX_DATASET_LEN
        && name.chars().next().is_some_and(valid_char)
        && name.chars().all(|c| valid_char(c) || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_names() {
        assert!(is_dataset_name("production"));
        assert!(is_dataset_name("preview_2024-q1"));
        assert!(!is_dataset_name(""));
        assert!(!is_dataset_name("-staging"));
        assert!(!is_dataset_name("Production"));
        assert!(!is_dataset_name(&"a".repeat(65)));
    }
}
