//! Error types for client configuration and resource resolution.

use thiserror::Error;

/// Errors building a resource URL from a handle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No image reference was supplied, or it was empty.
    #[error("missing image reference")]
    MissingImageReference,

    /// The asset id does not have the `image-<id>-<W>x<H>-<ext>` shape.
    #[error("malformed image asset reference: {0}")]
    MalformedAssetReference(String),

    /// The handle's identifiers do not form a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<url::ParseError> for ResolveError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

/// Errors loading or checking client and studio configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// API version is not a `YYYY-MM-DD` date tag.
    #[error("invalid API version '{0}' (expected YYYY-MM-DD)")]
    InvalidApiVersion(String),

    #[error("invalid project id '{0}'")]
    InvalidProjectId(String),

    #[error("invalid dataset name '{0}'")]
    InvalidDataset(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
