use crate::builtin;
use crate::document::{ContentDocument, DocumentTypeDefinition};
use crate::error::{FieldError, SchemaError};
use crate::field::FieldKind;
use crate::validate::{check_value, resolve};
use std::collections::HashSet;
use tracing::info;

/// Holds the document types known to the studio.
///
/// Populated once at startup, then only read. Registration checks the
/// definition in full before storing it, so a failed `register` leaves the
/// registry exactly as it was.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    types: Vec<DocumentTypeDefinition>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the built-in `home` and `project` types.
    pub fn with_builtin_types() -> Result<Self, SchemaError> {
        let mut registry = Self::new();
        for def in builtin::schema_types() {
            registry.register(def)?;
        }
        Ok(registry)
    }

    /// Checks and stores a document type definition.
    pub fn register(&mut self, def: DocumentTypeDefinition) -> Result<(), SchemaError> {
        if self.get(&def.type_name).is_some() {
            return Err(SchemaError::DuplicateTypeName(def.type_name));
        }
        check_definition(&def)?;

        info!(
            type_name = %def.type_name,
            fields = def.fields.len(),
            "Registered document type"
        );
        self.types.push(def);
        Ok(())
    }

    /// All registered definitions, in registration order.
    pub fn list_types(&self) -> &[DocumentTypeDefinition] {
        &self.types
    }

    pub fn get(&self, type_name: &str) -> Option<&DocumentTypeDefinition> {
        self.types.iter().find(|t| t.type_name == type_name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Validates `doc` against `against`, collecting every field error.
    pub fn validate(
        &self,
        doc: &ContentDocument,
        against: &DocumentTypeDefinition,
    ) -> Result<(), Vec<FieldError>> {
        crate::validate::validate(doc, against)
    }

    /// Validates and resolves `doc` against `against`, optionally as an edit
    /// of `previous`. See [`crate::resolve`].
    pub fn resolve(
        &self,
        doc: &ContentDocument,
        previous: Option<&ContentDocument>,
        against: &DocumentTypeDefinition,
    ) -> Result<ContentDocument, Vec<FieldError>> {
        resolve(doc, previous, against)
    }
}

fn check_definition(def: &DocumentTypeDefinition) -> Result<(), SchemaError> {
    if !is_identifier(&def.type_name) {
        return Err(SchemaError::InvalidIdentifier(def.type_name.clone()));
    }

    let mut seen = HashSet::new();
    for field in &def.fields {
        if !is_identifier(&field.name) {
            return Err(SchemaError::InvalidIdentifier(field.name.clone()));
        }
        if !seen.insert(field.name.as_str()) {
            return Err(SchemaError::DuplicateFieldName {
                type_name: def.type_name.clone(),
                field: field.name.clone(),
            });
        }
    }

    for (position, field) in def.fields.iter().enumerate() {
        if let FieldKind::Slug { source_field, .. } = &field.kind {
            if *source_field == field.name || def.field(source_field).is_none() {
                return Err(SchemaError::InvalidFieldReference {
                    type_name: def.type_name.clone(),
                    field: field.name.clone(),
                    reference: source_field.clone(),
                });
            }
        }

        if let Some(default) = &field.default_value {
            let mut errors = Vec::new();
            check_value(field, position, default, &mut errors);
            if let Some(err) = errors.first() {
                return Err(SchemaError::InvalidDefault {
                    type_name: def.type_name.clone(),
                    field: field.name.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }

    Ok(())
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_rules() {
        assert!(is_identifier("heroTitle"));
        assert!(is_identifier("_internal"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("hero-title"));
    }
}
