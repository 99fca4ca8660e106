use folio_cli::{
    ImageOptions, ValidationOutcome, build_registry, image_url, types_json, validate_document_file,
};
use folio_client::{ImageFormat, StudioConfig};
use folio_schema::FieldError;
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn studio() -> StudioConfig {
    StudioConfig::new("mq8wsgus")
}

// ── Registry ─────────────────────────────────────────────────────

#[test]
fn registry_follows_configured_types() {
    let mut config = studio();
    config.types = vec!["project".into()];
    let registry = build_registry(&config).unwrap();
    assert_eq!(registry.len(), 1);
    assert!(registry.get("project").is_some());
    assert!(registry.get("home").is_none());
}

#[test]
fn unknown_configured_type_is_an_error() {
    let mut config = studio();
    config.types = vec!["home".into(), "blog".into()];
    let err = build_registry(&config).unwrap_err();
    assert!(err.to_string().contains("blog"));
}

#[test]
fn repeated_configured_type_is_an_error() {
    let mut config = studio();
    config.types = vec!["home".into(), "project".into(), "home".into()];
    let message = build_registry(&config).unwrap_err().to_string();
    assert!(message.contains("more than once"), "{message}");
    assert!(!message.contains("unknown"), "{message}");
}

#[test]
fn types_json_lists_types_in_order() {
    let registry = build_registry(&studio()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&types_json(&registry).unwrap()).unwrap();
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["type_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["home", "project"]);
}

// ── Validation ───────────────────────────────────────────────────

#[test]
fn valid_document_is_resolved() {
    let dir = TempDir::new().unwrap();
    let doc = write(
        &dir,
        "project.json",
        r#"{"_id": "p1", "_type": "project", "title": "Hello, World! 2024"}"#,
    );
    let registry = build_registry(&studio()).unwrap();

    match validate_document_file(&registry, &doc, None).unwrap() {
        ValidationOutcome::Valid(resolved) => {
            assert_eq!(resolved.get_slug("slug"), Some("hello-world-2024"));
        }
        ValidationOutcome::Invalid(errors) => panic!("unexpected errors {errors:?}"),
    }
}

#[test]
fn invalid_document_reports_all_errors() {
    let dir = TempDir::new().unwrap();
    let doc = write(
        &dir,
        "home.json",
        r#"{"_id": "home", "_type": "home", "heroImagePosition": "top"}"#,
    );
    let registry = build_registry(&studio()).unwrap();

    let outcome = validate_document_file(&registry, &doc, None).unwrap();
    let ValidationOutcome::Invalid(errors) = outcome else {
        panic!("expected errors");
    };
    let fields: Vec<&str> = errors.iter().map(FieldError::field).collect();
    assert_eq!(fields, vec!["heroTitle", "heroImagePosition"]);
}

#[test]
fn read_only_edit_detected_against_previous() {
    let dir = TempDir::new().unwrap();
    let previous = write(
        &dir,
        "published.json",
        r#"{"_id": "home", "_type": "home", "title": "Home Page", "heroTitle": "Hi"}"#,
    );
    let draft = write(
        &dir,
        "draft.json",
        r#"{"_id": "home", "_type": "home", "title": "Start", "heroTitle": "Hi"}"#,
    );
    let registry = build_registry(&studio()).unwrap();

    let outcome = validate_document_file(&registry, &draft, Some(&previous)).unwrap();
    assert_eq!(
        outcome,
        ValidationOutcome::Invalid(vec![FieldError::ReadOnlyViolation {
            field: "title".into(),
            position: 0,
        }])
    );
}

#[test]
fn unregistered_document_type_is_an_error() {
    let dir = TempDir::new().unwrap();
    let doc = write(&dir, "post.json", r#"{"_id": "x", "_type": "post"}"#);
    let registry = build_registry(&studio()).unwrap();
    let err = validate_document_file(&registry, &doc, None).unwrap_err();
    assert!(err.to_string().contains("post"));
}

#[test]
fn unparseable_document_is_an_error() {
    let dir = TempDir::new().unwrap();
    let doc = write(&dir, "broken.json", "{ not json");
    let registry = build_registry(&studio()).unwrap();
    assert!(validate_document_file(&registry, &doc, None).is_err());
}

// ── Image URLs ───────────────────────────────────────────────────

#[test]
fn image_url_uses_studio_project_and_dataset() {
    let url = image_url(&studio(), "image-abc123-1200x800-jpg", &ImageOptions::default()).unwrap();
    assert_eq!(
        url,
        "https://cdn.sanity.io/images/mq8wsgus/production/abc123-1200x800.jpg"
    );
}

#[test]
fn image_url_applies_options() {
    let options = ImageOptions {
        width: Some(600),
        height: None,
        format: Some(ImageFormat::Webp),
        dataset: Some("preview".into()),
    };
    let url = image_url(&studio(), "image-abc123-1200x800-jpg", &options).unwrap();
    assert_eq!(
        url,
        "https://cdn.sanity.io/images/mq8wsgus/preview/abc123-1200x800.jpg?w=600&fm=webp"
    );
}

#[test]
fn image_url_rejects_malformed_asset() {
    assert!(image_url(&studio(), "cover.jpg", &ImageOptions::default()).is_err());
}
