//! Image references and CDN URL building.
//!
//! A stored image field looks like
//! `{"asset": {"_ref": "image-<id>-<W>x<H>-<ext>"}, "crop": {...}, "hotspot": {...}}`.
//! The asset id encodes the original dimensions, which is what lets crop
//! fractions be turned into a pixel rectangle without fetching the asset.

use crate::error::ResolveError;
use crate::handle::ClientHandle;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Host serving transformed images.
pub const IMAGE_CDN_HOST: &str = "cdn.sanity.io";

/// The stored form of an image field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageReference {
    pub asset: AssetRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop: Option<ImageCrop>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotspot: Option<ImageHotspot>,
}

/// Pointer to an uploaded asset document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRef {
    #[serde(rename = "_ref")]
    pub reference: String,
}

impl ImageReference {
    pub fn new(asset_ref: &str) -> Self {
        Self {
            asset: AssetRef {
                reference: asset_ref.into(),
            },
            crop: None,
            hotspot: None,
        }
    }

    /// Reads an image field value. Returns `None` for `null` or anything that
    /// is not an image object.
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }

    #[must_use]
    pub fn with_crop(mut self, crop: ImageCrop) -> Self {
        self.crop = Some(crop);
        self
    }

    #[must_use]
    pub fn with_hotspot(mut self, hotspot: ImageHotspot) -> Self {
        self.hotspot = Some(hotspot);
        self
    }

    pub fn asset_ref(&self) -> &str {
        &self.asset.reference
    }
}

/// Fractions of the original image trimmed from each edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageCrop {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl ImageCrop {
    pub fn is_empty(&self) -> bool {
        [self.top, self.bottom, self.left, self.right]
            .iter()
            .all(|v| v.abs() < f64::EPSILON)
    }

    /// Pixel rectangle of the crop within an image of the given size.
    pub fn to_rect(&self, width: u32, height: u32) -> Rect {
        let (w, h) = (f64::from(width), f64::from(height));
        let left = (self.left.clamp(0.0, 1.0) * w).round();
        let top = (self.top.clamp(0.0, 1.0) * h).round();
        let right = (self.right.clamp(0.0, 1.0) * w).round();
        let bottom = (self.bottom.clamp(0.0, 1.0) * h).round();
        Rect {
            x: left as u32,
            y: top as u32,
            width: (w - left - right).max(1.0) as u32,
            height: (h - top - bottom).max(1.0) as u32,
        }
    }
}

/// Focal region, as fractions of the image: centre `x`/`y` plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageHotspot {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Parsed form of an image asset id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub id: String,
    pub width: u32,
    pub height: u32,
    pub extension: String,
}

impl ImageAsset {
    /// Parses `image-<id>-<W>x<H>-<ext>`.
    pub fn parse(asset_ref: &str) -> Result<Self, ResolveError> {
        let malformed = || ResolveError::MalformedAssetReference(asset_ref.to_string());

        let mut parts = asset_ref.split('-');
        let (Some("image"), Some(id), Some(dims), Some(ext), None) = (
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
        ) else {
            return Err(malformed());
        };

        let (w, h) = dims.split_once('x').ok_or_else(malformed)?;
        let width: u32 = w.parse().map_err(|_| malformed())?;
        let height: u32 = h.parse().map_err(|_| malformed())?;
        if id.is_empty() || ext.is_empty() || width == 0 || height == 0 {
            return Err(malformed());
        }

        Ok(Self {
            id: id.into(),
            width,
            height,
            extension: ext.into(),
        })
    }

    /// File name on the image CDN, e.g. `abc123-1200x800.jpg`.
    pub fn file_name(&self) -> String {
        format!("{}-{}x{}.{}", self.id, self.width, self.height, self.extension)
    }
}

/// Output encoding requested from the CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpg,
    Png,
    Webp,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jpg => "jpg",
            Self::Png => "png",
            Self::Webp => "webp",
        }
    }
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpg),
            "png" => Ok(Self::Png),
            "webp" => Ok(Self::Webp),
            other => Err(format!("unsupported image format '{other}'")),
        }
    }
}

/// How the image is fitted into the requested width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    Clip,
    Crop,
    Fill,
    FillMax,
    Max,
    Scale,
    Min,
}

impl FitMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clip => "clip",
            Self::Crop => "crop",
            Self::Fill => "fill",
            Self::FillMax => "fillmax",
            Self::Max => "max",
            Self::Scale => "scale",
            Self::Min => "min",
        }
    }
}

/// Resolves an image reference against a handle.
///
/// Fails with [`ResolveError::MissingImageReference`] when `reference` is
/// absent or has an empty asset id.
pub fn resolve_image_url(
    reference: Option<&ImageReference>,
    handle: &ClientHandle,
) -> Result<UrlBuilder, ResolveError> {
    let reference = reference
        .filter(|r| !r.asset_ref().trim().is_empty())
        .ok_or(ResolveError::MissingImageReference)?;
    let asset = ImageAsset::parse(reference.asset_ref())?;

    let mut base = Url::parse(&format!("https://{IMAGE_CDN_HOST}/"))?;
    base.path_segments_mut()
        .map_err(|()| ResolveError::InvalidUrl(IMAGE_CDN_HOST.to_string()))?
        .clear()
        .push("images")
        .push(handle.project_id())
        .push(handle.dataset())
        .push(&asset.file_name());

    Ok(UrlBuilder {
        base,
        asset,
        crop: reference.crop,
        hotspot: reference.hotspot,
        rect: None,
        width: None,
        height: None,
        quality: None,
        format: None,
        auto_format: false,
        fit: None,
    })
}

/// An image URL under construction.
///
/// Transforms may be chained in any order; the emitted URL lists its
/// parameters in a fixed order, so two builders with the same settings
/// always produce the same string.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlBuilder {
    base: Url,
    asset: ImageAsset,
    crop: Option<ImageCrop>,
    hotspot: Option<ImageHotspot>,
    rect: Option<Rect>,
    width: Option<u32>,
    height: Option<u32>,
    quality: Option<u8>,
    format: Option<ImageFormat>,
    auto_format: bool,
    fit: Option<FitMode>,
}

impl UrlBuilder {
    pub fn asset(&self) -> &ImageAsset {
        &self.asset
    }

    /// Replaces the crop stored on the reference.
    #[must_use]
    pub fn crop(mut self, crop: ImageCrop) -> Self {
        self.crop = Some(crop);
        self
    }

    /// Explicit source rectangle in pixels; takes precedence over any crop.
    #[must_use]
    pub fn rect(mut self, x: u32, y: u32, width: u32, height: u32) -> Self {
        self.rect = Some(Rect {
            x,
            y,
            width,
            height,
        });
        self
    }

    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// JPEG/WebP quality, clamped to 0–100.
    #[must_use]
    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = Some(quality.min(100));
        self
    }

    #[must_use]
    pub fn format(mut self, format: ImageFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Let the CDN pick the best format the browser accepts.
    #[must_use]
    pub fn auto_format(mut self) -> Self {
        self.auto_format = true;
        self
    }

    #[must_use]
    pub fn fit(mut self, fit: FitMode) -> Self {
        self.fit = Some(fit);
        self
    }

    /// Finalizes the URL.
    pub fn url(&self) -> String {
        let mut params: Vec<(&str, String)> = Vec::new();

        let rect = self.rect.or_else(|| {
            self.crop
                .filter(|c| !c.is_empty())
                .map(|c| c.to_rect(self.asset.width, self.asset.height))
        });
        if let Some(r) = rect {
            params.push(("rect", format!("{},{},{},{}", r.x, r.y, r.width, r.height)));
        }
        if let Some(w) = self.width {
            params.push(("w", w.to_string()));
        }
        if let Some(h) = self.height {
            params.push(("h", h.to_string()));
        }
        if let Some(q) = self.quality {
            params.push(("q", q.to_string()));
        }
        if let Some(fm) = self.format {
            params.push(("fm", fm.as_str().to_string()));
        }
        if self.auto_format {
            params.push(("auto", "format".to_string()));
        }
        if let Some(fit) = self.fit {
            params.push(("fit", fit.as_str().to_string()));
        }
        if let (Some(spot), Some(_), Some(_)) = (self.hotspot, self.width, self.height) {
            params.push(("crop", "focalpoint".to_string()));
            params.push(("fp-x", spot.x.clamp(0.0, 1.0).to_string()));
            params.push(("fp-y", spot.y.clamp(0.0, 1.0).to_string()));
        }

        let mut url = self.base.clone();
        if !params.is_empty() {
            let query: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
            url.set_query(Some(&query.join("&")));
        }
        url.into()
    }
}

impl fmt::Display for UrlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}
