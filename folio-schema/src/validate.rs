//! The generic document validator.
//!
//! One function walks a type's fields in declaration order and evaluates each
//! field's declarative flags (required, read-only, default, slug source,
//! constraints) against the document. All errors are collected.

use crate::document::{ContentDocument, DocumentTypeDefinition};
use crate::error::FieldError;
use crate::field::{ConstraintSet, ElementKind, FieldDefinition, FieldKind};
use crate::slug::{is_url_safe, slugify};
use serde_json::{Value, json};
use tracing::{debug, warn};
use url::Url;

/// Validates a new document against `def`.
///
/// Read-only fields are compared against their default, if any.
pub fn validate(doc: &ContentDocument, def: &DocumentTypeDefinition) -> Result<(), Vec<FieldError>> {
    resolve(doc, None, def).map(|_| ())
}

/// Validates an edit of `previous`. Read-only fields must keep the value
/// stored in `previous`.
pub fn validate_revision(
    doc: &ContentDocument,
    previous: &ContentDocument,
    def: &DocumentTypeDefinition,
) -> Result<(), Vec<FieldError>> {
    resolve(doc, Some(previous), def).map(|_| ())
}

/// Validates `doc` and returns it with defaults applied, read-only values
/// carried forward from `previous` and missing slugs derived from their
/// source field.
///
/// `null`, empty strings, empty lists and empty slugs count as absent, both in
/// the document and as defaults. The document is checked against `def` as
/// given; matching `_type` to the definition is the caller's concern.
pub fn resolve(
    doc: &ContentDocument,
    previous: Option<&ContentDocument>,
    def: &DocumentTypeDefinition,
) -> Result<ContentDocument, Vec<FieldError>> {
    let mut resolved = doc.clone();
    let mut errors = Vec::new();

    for (position, field) in def.fields.iter().enumerate() {
        let mut value = non_empty(doc.get(&field.name));

        if field.read_only {
            let baseline = previous
                .and_then(|p| non_empty(p.get(&field.name)))
                .or_else(|| non_empty(field.default_value.as_ref()));
            if let Some(baseline) = baseline {
                if value.as_ref().is_some_and(|supplied| *supplied != baseline) {
                    errors.push(FieldError::ReadOnlyViolation {
                        field: field.name.clone(),
                        position,
                    });
                    continue;
                }
                if value.is_none() {
                    value = Some(baseline);
                }
            }
        }

        if value.is_none() {
            value = non_empty(field.default_value.as_ref());
        }

        if value.is_none() {
            if let FieldKind::Slug {
                source_field,
                max_length,
            } = &field.kind
            {
                value = derive_slug(&resolved, def, source_field, *max_length);
                if value.is_some() {
                    debug!(field = %field.name, source = %source_field, "Derived slug from source field");
                }
            }
        }

        match value {
            None if field.required => errors.push(FieldError::MissingRequiredField {
                field: field.name.clone(),
                position,
            }),
            None => {}
            Some(value) => {
                let before = errors.len();
                check_value(field, position, &value, &mut errors);
                if errors.len() == before {
                    resolved.set(&field.name, value);
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(resolved)
    } else {
        warn!(
            document_id = %doc.id,
            document_type = %def.type_name,
            errors = errors.len(),
            "Document failed validation"
        );
        Err(errors)
    }
}

/// True for `null`, empty strings, empty arrays and objects with no content
/// beyond `_type`/`_key` markers (e.g. a slug whose `current` is empty).
pub(crate) fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map
            .iter()
            .all(|(k, v)| k == "_type" || k == "_key" || is_empty_value(v)),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Checks a present value against the field's kind and constraints, pushing
/// any failures onto `errors`.
pub(crate) fn check_value(
    field: &FieldDefinition,
    position: usize,
    value: &Value,
    errors: &mut Vec<FieldError>,
) {
    let name = || field.name.clone();
    let mismatch = |expected: &str, found: String| FieldError::TypeMismatch {
        field: field.name.clone(),
        position,
        expected: expected.into(),
        found,
    };

    if !shape_matches(&field.kind, value) {
        errors.push(mismatch(field.kind.type_name(), describe(value).into()));
        return;
    }

    match &field.kind {
        FieldKind::ShortText | FieldKind::LongText { .. } => {
            if let (Some(max), Some(s)) = (field.constraints.max_length, value.as_str()) {
                let length = s.chars().count();
                if length > max {
                    errors.push(FieldError::ConstraintViolation {
                        field: name(),
                        position,
                        detail: format!("{length} characters exceeds maximum of {max}"),
                    });
                }
            }
        }
        FieldKind::Slug { max_length, .. } => {
            let current = slug_current(value).unwrap_or_default();
            if !is_url_safe(current) {
                errors.push(mismatch("url-safe slug", format!("'{current}'")));
            } else if current.chars().count() > *max_length {
                errors.push(FieldError::SlugTooLong {
                    field: name(),
                    position,
                    length: current.chars().count(),
                    max_length: *max_length,
                });
            }
        }
        FieldKind::Image { .. } => {}
        FieldKind::Url => {
            if let Some(scheme) = value.as_str().and_then(url_scheme) {
                if !field.constraints.allows_scheme(&scheme) {
                    errors.push(FieldError::ConstraintViolation {
                        field: name(),
                        position,
                        detail: format!("URL scheme '{scheme}' is not allowed"),
                    });
                }
            }
        }
        FieldKind::EnumChoice { options, .. } => {
            let chosen = value.as_str().unwrap_or_default();
            if !options.iter().any(|o| o.value == chosen) {
                errors.push(FieldError::InvalidChoice {
                    field: name(),
                    position,
                    value: chosen.into(),
                    allowed: options.iter().map(|o| o.value.clone()).collect(),
                });
            }
        }
        FieldKind::ListOf { of } => {
            let items = value.as_array().map(Vec::as_slice).unwrap_or_default();
            if let Some(max) = field.constraints.max_items {
                if items.len() > max {
                    errors.push(FieldError::ConstraintViolation {
                        field: name(),
                        position,
                        detail: format!("{} items exceeds maximum of {max}", items.len()),
                    });
                }
            }
            for (index, item) in items.iter().enumerate() {
                if !of.iter().any(|k| element_matches(*k, item, &field.constraints)) {
                    errors.push(mismatch(
                        describe_elements(of).as_str(),
                        format!("{} at index {index}", describe(item)),
                    ));
                }
            }
        }
    }
}

fn non_empty(value: Option<&Value>) -> Option<Value> {
    value.filter(|v| !is_empty_value(v)).cloned()
}

fn derive_slug(
    resolved: &ContentDocument,
    def: &DocumentTypeDefinition,
    source_field: &str,
    max_length: usize,
) -> Option<Value> {
    let source = resolved.get_str(source_field).filter(|s| !s.is_empty()).or_else(|| {
        def.field(source_field)
            .and_then(|f| f.default_value.as_ref())
            .and_then(Value::as_str)
    })?;
    let slug = slugify(source, max_length);
    (!slug.is_empty()).then(|| json!({ "_type": "slug", "current": slug }))
}

fn shape_matches(kind: &FieldKind, value: &Value) -> bool {
    match kind {
        FieldKind::ShortText | FieldKind::LongText { .. } | FieldKind::EnumChoice { .. } => {
            value.is_string()
        }
        FieldKind::Slug { .. } => slug_current(value).is_some(),
        FieldKind::Image { .. } => value
            .pointer("/asset/_ref")
            .and_then(Value::as_str)
            .is_some_and(|r| !r.is_empty()),
        FieldKind::Url => value.as_str().and_then(url_scheme).is_some(),
        FieldKind::ListOf { .. } => value.is_array(),
    }
}

fn element_matches(kind: ElementKind, item: &Value, constraints: &ConstraintSet) -> bool {
    if !shape_matches(&kind.as_field_kind(), item) {
        return false;
    }
    match kind {
        ElementKind::Url => item
            .as_str()
            .and_then(url_scheme)
            .is_some_and(|s| constraints.allows_scheme(&s)),
        _ => true,
    }
}

fn slug_current(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s),
        Value::Object(map) => map.get("current").and_then(Value::as_str),
        _ => None,
    }
}

/// Scheme of an absolute URL, or `None` when `s` does not parse as one.
fn url_scheme(s: &str) -> Option<String> {
    Url::parse(s).ok().map(|u| u.scheme().to_string())
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn describe_elements(of: &[ElementKind]) -> String {
    if of.is_empty() {
        return "no elements".into();
    }
    let names: Vec<&str> = of.iter().map(ElementKind::type_name).collect();
    format!("one of [{}]", names.join(", "))
}
