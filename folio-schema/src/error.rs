//! Error types for schema registration and document validation.

use serde::Serialize;
use thiserror::Error;

/// Errors raised while registering a document type. These are fatal at
/// startup: a misconfigured schema must not load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A type with this name is already registered.
    #[error("document type '{0}' is already registered")]
    DuplicateTypeName(String),

    /// A slug's source field does not name another field of the type.
    #[error("field '{field}' of '{type_name}' references unknown field '{reference}'")]
    InvalidFieldReference {
        type_name: String,
        field: String,
        reference: String,
    },

    /// A field's default does not conform to its declared kind.
    #[error("default for field '{field}' of '{type_name}' is invalid: {reason}")]
    InvalidDefault {
        type_name: String,
        field: String,
        reason: String,
    },

    /// Type or field name is not a valid identifier.
    #[error("invalid identifier '{0}'")]
    InvalidIdentifier(String),

    /// Two fields of the same type share a name.
    #[error("field '{field}' is declared more than once in '{type_name}'")]
    DuplicateFieldName { type_name: String, field: String },
}

/// A single field-level validation failure.
///
/// Every variant carries the field name and its declaration index within the
/// type, so callers can render all errors at once in form order.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum FieldError {
    #[error("field '{field}' is required")]
    MissingRequiredField { field: String, position: usize },

    #[error("field '{field}' expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        position: usize,
        expected: String,
        found: String,
    },

    #[error("slug '{field}' is {length} characters long (max {max_length})")]
    SlugTooLong {
        field: String,
        position: usize,
        length: usize,
        max_length: usize,
    },

    #[error("field '{field}' is read-only and cannot be changed")]
    ReadOnlyViolation { field: String, position: usize },

    #[error("field '{field}' value '{value}' is not one of {allowed:?}")]
    InvalidChoice {
        field: String,
        position: usize,
        value: String,
        allowed: Vec<String>,
    },

    #[error("field '{field}' violates constraint: {detail}")]
    ConstraintViolation {
        field: String,
        position: usize,
        detail: String,
    },
}

impl FieldError {
    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingRequiredField { field, .. }
            | Self::TypeMismatch { field, .. }
            | Self::SlugTooLong { field, .. }
            | Self::ReadOnlyViolation { field, .. }
            | Self::InvalidChoice { field, .. }
            | Self::ConstraintViolation { field, .. } => field,
        }
    }

    /// Declaration index of the offending field.
    pub fn position(&self) -> usize {
        match self {
            Self::MissingRequiredField { position, .. }
            | Self::TypeMismatch { position, .. }
            | Self::SlugTooLong { position, .. }
            | Self::ReadOnlyViolation { position, .. }
            | Self::InvalidChoice { position, .. }
            | Self::ConstraintViolation { position, .. } => *position,
        }
    }
}
