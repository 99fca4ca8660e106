//! Client configuration and resource resolution for Folio content.
//!
//! This crate never talks to the network. It:
//! - Binds a [`ClientConfig`] to repository defaults, producing a [`ClientHandle`]
//! - Builds endpoint descriptors for the external fetch layer
//! - Turns stored image references into CDN URLs via [`UrlBuilder`]
//! - Loads the studio configuration file ([`StudioConfig`])
//!
//! # Defaults
//!
//! Unless the caller says otherwise a handle reads the `production` dataset,
//! pins API version `2024-05-01` and bypasses the CDN so reads are fresh.

mod config;
mod error;
mod handle;
mod image;
mod studio;

pub use config::{ApiVersion, ClientConfig, ClientDefaults, DEFAULT_API_VERSION, DEFAULT_DATASET};
pub use error::{ConfigError, ConfigResult, ResolveError};
pub use handle::{API_CDN_HOST, API_HOST, ClientHandle, create_client, create_client_with_defaults};
pub use image::{
    AssetRef, FitMode, IMAGE_CDN_HOST, ImageAsset, ImageCrop, ImageFormat, ImageHotspot, ImageReference,
    Rect, UrlBuilder, resolve_image_url,
};
pub use studio::StudioConfig;
