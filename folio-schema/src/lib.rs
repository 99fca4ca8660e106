//! Content schema model for Folio.
//!
//! Defines the contract for what a valid content document looks like:
//! - [`FieldDefinition`] / [`FieldKind`]: typed, named fields as plain data
//! - [`DocumentTypeDefinition`]: an ordered set of fields under a type name
//! - [`ContentDocument`]: a runtime instance (field name → JSON value)
//! - [`SchemaRegistry`]: registration checks plus the generic validator
//!
//! The built-in `home` and `project` types live in [`builtin`]. Definitions are
//! registered once at startup and never mutated afterwards.

pub mod builtin;
mod document;
mod error;
mod field;
mod registry;
mod slug;
mod validate;

pub use document::{ContentDocument, DocumentTypeDefinition};
pub use error::{FieldError, SchemaError};
pub use field::{
    ChoiceLayout, ConstraintSet, ElementKind, EnumOption, FieldDefinition, FieldKind,
};
pub use registry::SchemaRegistry;
pub use slug::{is_url_safe, slugify};
pub use validate::{resolve, validate, validate_revision};
