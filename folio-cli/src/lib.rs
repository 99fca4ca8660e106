//! Content ingestion helpers behind the `folio` binary.

use anyhow::{Context, Result, anyhow, bail};
use folio_client::{ClientConfig, ImageFormat, ImageReference, StudioConfig, create_client};
use folio_schema::{ContentDocument, FieldError, SchemaRegistry, builtin};
use std::path::Path;
use tracing::{info, warn};

/// Result of checking a document file.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    /// The document with defaults applied and slugs derived.
    Valid(ContentDocument),
    /// Every field error, in declaration order.
    Invalid(Vec<FieldError>),
}

/// Image transforms requested on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub format: Option<ImageFormat>,
    /// Read from this dataset instead of the studio's.
    pub dataset: Option<String>,
}

/// Registers the document types the studio config enables, in its order.
pub fn build_registry(config: &StudioConfig) -> Result<SchemaRegistry> {
    let mut available = builtin::schema_types();
    let mut registry = SchemaRegistry::new();

    for name in &config.types {
        if registry.get(name).is_some() {
            bail!("document type '{name}' is listed more than once in studio config");
        }
        let index = available
            .iter()
            .position(|t| t.type_name == *name)
            .ok_or_else(|| anyhow!("unknown document type '{name}' in studio config"))?;
        let def = available.remove(index);
        registry
            .register(def)
            .with_context(|| format!("registering document type '{name}'"))?;
    }
    Ok(registry)
}

/// Pretty JSON of every registered type.
pub fn types_json(registry: &SchemaRegistry) -> Result<String> {
    Ok(serde_json::to_string_pretty(registry.list_types())?)
}

/// Validates a JSON document file, optionally as an edit of `previous`.
pub fn validate_document_file(
    registry: &SchemaRegistry,
    path: &Path,
    previous: Option<&Path>,
) -> Result<ValidationOutcome> {
    let doc = read_document(path)?;
    let def = registry
        .get(&doc.document_type)
        .ok_or_else(|| anyhow!("document type '{}' is not registered", doc.document_type))?;

    let previous = previous.map(read_document).transpose()?;
    if let Some(prev) = &previous {
        if prev.id != doc.id {
            warn!(document_id = %doc.id, previous_id = %prev.id, "Comparing revisions of different documents");
        }
    }

    match registry.resolve(&doc, previous.as_ref(), def) {
        Ok(resolved) => {
            info!(document_id = %resolved.id, document_type = %def.type_name, "Document is valid");
            Ok(ValidationOutcome::Valid(resolved))
        }
        Err(errors) => Ok(ValidationOutcome::Invalid(errors)),
    }
}

/// CDN URL for an image asset in the studio's project.
pub fn image_url(config: &StudioConfig, asset_ref: &str, options: &ImageOptions) -> Result<String> {
    let mut handle = create_client(config.client_config());
    if let Some(dataset) = &options.dataset {
        handle = handle.with_config(&ClientConfig::default().with_dataset(dataset));
    }

    let mut builder = handle.image_url(&ImageReference::new(asset_ref))?;
    if let Some(width) = options.width {
        builder = builder.width(width);
    }
    if let Some(height) = options.height {
        builder = builder.height(height);
    }
    if let Some(format) = options.format {
        builder = builder.format(format);
    }
    Ok(builder.url())
}

fn read_document(path: &Path) -> Result<ContentDocument> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let doc = ContentDocument::from_json(&contents)
        .with_context(|| format!("parsing {}", path.display()))?;
    if doc.id.is_empty() {
        bail!("{} has an empty _id", path.display());
    }
    Ok(doc)
}
