use crate::field::FieldDefinition;
use crate::validate::is_empty_value;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Declares a document type: a name plus its ordered fields.
///
/// Field order is part of the contract. The studio renders fields in this
/// order and validation errors are reported in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentTypeDefinition {
    pub type_name: String,
    pub display_title: String,
    pub fields: Vec<FieldDefinition>,
}

impl DocumentTypeDefinition {
    pub fn new(type_name: &str, display_title: &str, fields: Vec<FieldDefinition>) -> Self {
        Self {
            type_name: type_name.into(),
            display_title: display_title.into(),
            fields,
        }
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Declaration index of a field.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

/// A content document as stored by the content store.
///
/// System attributes (`_id`, `_type`) sit beside user fields in the JSON form;
/// any other `_`-prefixed attribute (`_rev`, `_createdAt`, ...) is kept in
/// `fields` untouched and ignored by validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_type")]
    pub document_type: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ContentDocument {
    /// Creates an empty document of the given type with a fresh random id.
    pub fn new(document_type: &str) -> Self {
        Self::with_id(&Uuid::new_v4().to_string(), document_type)
    }

    pub fn with_id(id: &str, document_type: &str) -> Self {
        Self {
            id: id.into(),
            document_type: document_type.into(),
            fields: Map::new(),
        }
    }

    /// Parses a document from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Extract a string field.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|v| v.as_str())
    }

    /// Extract the `current` value of a slug field.
    pub fn get_slug(&self, name: &str) -> Option<&str> {
        match self.fields.get(name)? {
            Value::String(s) => Some(s),
            v => v.get("current").and_then(|c| c.as_str()),
        }
    }

    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.fields.remove(name)
    }

    /// True when the field holds a non-empty value.
    pub fn is_present(&self, name: &str) -> bool {
        self.fields.get(name).is_some_and(|v| !is_empty_value(v))
    }
}
