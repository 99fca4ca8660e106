use folio_schema::builtin;
use folio_schema::{
    ChoiceLayout, DocumentTypeDefinition, EnumOption, FieldDefinition, SchemaError,
    SchemaRegistry,
};
use pretty_assertions::assert_eq;

fn post_type() -> DocumentTypeDefinition {
    DocumentTypeDefinition::new(
        "post",
        "Post",
        vec![
            FieldDefinition::short_text("title", "Title").required(),
            FieldDefinition::slug("slug", "Slug", "title", 64),
        ],
    )
}

// ── Builtins ─────────────────────────────────────────────────────

#[test]
fn builtin_registry_lists_home_then_project() {
    let registry = SchemaRegistry::with_builtin_types().unwrap();
    let names: Vec<&str> = registry
        .list_types()
        .iter()
        .map(|t| t.type_name.as_str())
        .collect();
    assert_eq!(names, vec!["home", "project"]);
}

#[test]
fn builtin_types_pass_registration_checks() {
    let mut registry = SchemaRegistry::new();
    for def in builtin::schema_types() {
        registry.register(def).unwrap();
    }
    assert_eq!(registry.len(), 2);
}

// ── Round trip ───────────────────────────────────────────────────

#[test]
fn register_then_list_returns_definition_unchanged() {
    let mut registry = SchemaRegistry::new();
    registry.register(post_type()).unwrap();
    assert_eq!(registry.list_types(), &[post_type()]);
    assert_eq!(registry.get("post"), Some(&post_type()));
}

#[test]
fn empty_registry() {
    let registry = SchemaRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.get("home").is_none());
}

// ── Failures ─────────────────────────────────────────────────────

#[test]
fn duplicate_type_name_rejected_without_mutation() {
    let mut registry = SchemaRegistry::new();
    registry.register(post_type()).unwrap();
    let before = registry.list_types().to_vec();

    let mut other = post_type();
    other.display_title = "Another Post".into();
    let err = registry.register(other).unwrap_err();

    assert_eq!(err, SchemaError::DuplicateTypeName("post".into()));
    assert_eq!(registry.list_types(), before.as_slice());
}

#[test]
fn slug_with_unknown_source_rejected() {
    let def = DocumentTypeDefinition::new(
        "post",
        "Post",
        vec![
            FieldDefinition::short_text("title", "Title"),
            FieldDefinition::slug("slug", "Slug", "headline", 96),
        ],
    );
    let err = SchemaRegistry::new().register(def).unwrap_err();
    assert_eq!(
        err,
        SchemaError::InvalidFieldReference {
            type_name: "post".into(),
            field: "slug".into(),
            reference: "headline".into(),
        }
    );
}

#[test]
fn slug_sourced_from_itself_rejected() {
    let def = DocumentTypeDefinition::new(
        "post",
        "Post",
        vec![FieldDefinition::slug("slug", "Slug", "slug", 96)],
    );
    assert!(matches!(
        SchemaRegistry::new().register(def),
        Err(SchemaError::InvalidFieldReference { .. })
    ));
}

#[test]
fn slug_source_may_be_declared_later() {
    let def = DocumentTypeDefinition::new(
        "post",
        "Post",
        vec![
            FieldDefinition::slug("slug", "Slug", "title", 96),
            FieldDefinition::short_text("title", "Title"),
        ],
    );
    assert!(SchemaRegistry::new().register(def).is_ok());
}

#[test]
fn enum_default_outside_options_rejected() {
    let def = DocumentTypeDefinition::new(
        "banner",
        "Banner",
        vec![
            FieldDefinition::enum_choice(
                "align",
                "Align",
                vec![EnumOption::new("Left", "left"), EnumOption::new("Right", "right")],
                ChoiceLayout::Radio,
            )
            .with_default("center"),
        ],
    );
    let err = SchemaRegistry::new().register(def).unwrap_err();
    match err {
        SchemaError::InvalidDefault { field, reason, .. } => {
            assert_eq!(field, "align");
            assert!(reason.contains("center"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn default_of_wrong_kind_rejected() {
    let def = DocumentTypeDefinition::new(
        "banner",
        "Banner",
        vec![FieldDefinition::short_text("heading", "Heading").with_default(42)],
    );
    assert!(matches!(
        SchemaRegistry::new().register(def),
        Err(SchemaError::InvalidDefault { .. })
    ));
}

#[test]
fn invalid_type_name_rejected() {
    let def = DocumentTypeDefinition::new("blog post", "Blog Post", vec![]);
    assert_eq!(
        SchemaRegistry::new().register(def).unwrap_err(),
        SchemaError::InvalidIdentifier("blog post".into())
    );
}

#[test]
fn duplicate_field_name_rejected() {
    let def = DocumentTypeDefinition::new(
        "post",
        "Post",
        vec![
            FieldDefinition::short_text("title", "Title"),
            FieldDefinition::long_text("title", "Title again", 3),
        ],
    );
    assert_eq!(
        SchemaRegistry::new().register(def).unwrap_err(),
        SchemaError::DuplicateFieldName {
            type_name: "post".into(),
            field: "title".into(),
        }
    );
}

#[test]
fn failed_registration_leaves_registry_usable() {
    let mut registry = SchemaRegistry::with_builtin_types().unwrap();
    let bad = DocumentTypeDefinition::new(
        "post",
        "Post",
        vec![FieldDefinition::slug("slug", "Slug", "missing", 96)],
    );
    assert!(registry.register(bad).is_err());
    assert_eq!(registry.len(), 2);
    registry.register(post_type()).unwrap();
    assert_eq!(registry.len(), 3);
}

// ── Display ──────────────────────────────────────────────────────

#[test]
fn schema_error_display() {
    let err = SchemaError::DuplicateTypeName("home".into());
    assert!(format!("{err}").contains("already registered"));

    let err = SchemaError::InvalidFieldReference {
        type_name: "project".into(),
        field: "slug".into(),
        reference: "name".into(),
    };
    let msg = format!("{err}");
    assert!(msg.contains("slug"));
    assert!(msg.contains("name"));
}
