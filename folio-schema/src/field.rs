use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single named, typed field within a document type.
///
/// Fields carry no behavior of their own: requiredness, read-only status,
/// defaults and constraints are flags evaluated by the generic validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    pub title: String,
    /// Help text shown beneath the field in the studio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub read_only: bool,
    /// Value used when a document leaves the field empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(default, skip_serializing_if = "ConstraintSet::is_empty")]
    pub constraints: ConstraintSet,
}

impl FieldDefinition {
    /// Creates an optional, editable field with no default.
    pub fn new(name: &str, title: &str, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            description: None,
            kind,
            required: false,
            read_only: false,
            default_value: None,
            constraints: ConstraintSet::default(),
        }
    }

    /// Shorthand for a single-line string field.
    pub fn short_text(name: &str, title: &str) -> Self {
        Self::new(name, title, FieldKind::ShortText)
    }

    /// Shorthand for a multi-line text field rendered with `rows` lines.
    pub fn long_text(name: &str, title: &str, rows: u8) -> Self {
        Self::new(name, title, FieldKind::LongText { rows })
    }

    /// Shorthand for a slug derived from `source_field`.
    pub fn slug(name: &str, title: &str, source_field: &str, max_length: usize) -> Self {
        Self::new(
            name,
            title,
            FieldKind::Slug {
                source_field: source_field.into(),
                max_length,
            },
        )
    }

    /// Shorthand for an image field. `hotspot` enables crop/focal-point editing.
    pub fn image(name: &str, title: &str, hotspot: bool) -> Self {
        Self::new(name, title, FieldKind::Image { hotspot })
    }

    /// Shorthand for an absolute URL field.
    pub fn url(name: &str, title: &str) -> Self {
        Self::new(name, title, FieldKind::Url)
    }

    /// Shorthand for a string field restricted to a fixed list of options.
    pub fn enum_choice(
        name: &str,
        title: &str,
        options: Vec<EnumOption>,
        layout: ChoiceLayout,
    ) -> Self {
        Self::new(name, title, FieldKind::EnumChoice { options, layout })
    }

    /// Shorthand for an array field whose elements take one of `of`.
    pub fn list_of(name: &str, title: &str, of: Vec<ElementKind>) -> Self {
        Self::new(name, title, FieldKind::ListOf { of })
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_constraints(mut self, constraints: ConstraintSet) -> Self {
        self.constraints = constraints;
        self
    }
}

/// The data type of a field.
///
/// The validator matches exhaustively over these variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    ShortText,
    LongText {
        rows: u8,
    },
    Slug {
        source_field: String,
        max_length: usize,
    },
    Image {
        #[serde(default)]
        hotspot: bool,
    },
    Url,
    EnumChoice {
        options: Vec<EnumOption>,
        #[serde(default)]
        layout: ChoiceLayout,
    },
    ListOf {
        #[serde(default)]
        of: Vec<ElementKind>,
    },
}

impl FieldKind {
    /// Name of the stored value shape, used in type-mismatch messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::ShortText | Self::EnumChoice { .. } => "string",
            Self::LongText { .. } => "text",
            Self::Slug { .. } => "slug",
            Self::Image { .. } => "image",
            Self::Url => "url",
            Self::ListOf { .. } => "array",
        }
    }
}

/// Kinds a list element may take. Nested lists, slugs and choices are not
/// allowed inside arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    ShortText,
    LongText,
    Url,
    Image,
}

impl ElementKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::ShortText => "string",
            Self::LongText => "text",
            Self::Url => "url",
            Self::Image => "image",
        }
    }

    /// Promotes the element kind to the field kind used for conformance checks.
    pub fn as_field_kind(&self) -> FieldKind {
        match self {
            Self::ShortText => FieldKind::ShortText,
            Self::LongText => FieldKind::LongText { rows: 0 },
            Self::Url => FieldKind::Url,
            Self::Image => FieldKind::Image { hotspot: false },
        }
    }
}

/// One selectable option of an [`FieldKind::EnumChoice`] field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumOption {
    pub label: String,
    pub value: String,
}

impl EnumOption {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// How the studio renders an enumerated choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceLayout {
    #[default]
    Dropdown,
    Radio,
}

/// Declarative constraints evaluated alongside kind conformance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintSet {
    /// Maximum character count for text values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Maximum number of elements for list values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
    /// Allowed URL schemes. Empty means `http` and `https`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub url_schemes: Vec<String>,
}

impl ConstraintSet {
    pub fn is_empty(&self) -> bool {
        self.max_length.is_none() && self.max_items.is_none() && self.url_schemes.is_empty()
    }

    pub fn allows_scheme(&self, scheme: &str) -> bool {
        if self.url_schemes.is_empty() {
            matches!(scheme, "http" | "https")
        } else {
            self.url_schemes.iter().any(|s| s.eq_ignore_ascii_case(scheme))
        }
    }
}
