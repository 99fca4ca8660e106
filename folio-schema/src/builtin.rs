//! Document types shipped with the studio.

use crate::document::DocumentTypeDefinition;
use crate::field::{ChoiceLayout, ElementKind, EnumOption, FieldDefinition};

/// Maximum slug length for project pages.
pub const PROJECT_SLUG_MAX_LENGTH: usize = 96;

/// All built-in types, in the order the studio lists them.
pub fn schema_types() -> Vec<DocumentTypeDefinition> {
    vec![home(), project()]
}

/// Singleton landing page content.
pub fn home() -> DocumentTypeDefinition {
    DocumentTypeDefinition::new(
        "home",
        "Home Page",
        vec![
            FieldDefinition::short_text("title", "Title")
                .with_description("This title is for internal use in the CMS.")
                .with_default("Home Page")
                .read_only(),
            FieldDefinition::short_text("heroTitle", "Hero Title")
                .with_description(
                    "The main, large title on the homepage (e.g., \"Hello, I'm Simon\").",
                )
                .required(),
            FieldDefinition::long_text("heroSubtitle", "Hero Subtitle", 3)
                .with_description("The paragraph of text that appears below the main title."),
            FieldDefinition::image("heroImage", "Hero Image", true)
                .with_description("The main image for the hero section."),
            FieldDefinition::enum_choice(
                "heroImagePosition",
                "Hero Image Position",
                vec![EnumOption::new("Left", "left"), EnumOption::new("Right", "right")],
                ChoiceLayout::Radio,
            )
            .with_description("Choose whether the image appears on the left or right of the text.")
            .with_default("right"),
            FieldDefinition::short_text("skillsTitle", "Skills Section Title")
                .with_description("The headline for your skills list (e.g., \"What I Do\").")
                .with_default("My Core Skills"),
            FieldDefinition::list_of("skills", "Skills", vec![ElementKind::ShortText])
                .with_description("A list of your key skills or services."),
        ],
    )
}

/// A portfolio project page.
pub fn project() -> DocumentTypeDefinition {
    DocumentTypeDefinition::new(
        "project",
        "Project",
        vec![
            FieldDefinition::short_text("title", "Title").required(),
            FieldDefinition::slug("slug", "Slug", "title", PROJECT_SLUG_MAX_LENGTH)
                .with_description(
                    "A unique, URL-friendly identifier. Click \"Generate\" to create from title.",
                )
                .required(),
            FieldDefinition::image("coverImage", "Cover Image", true),
            FieldDefinition::long_text("description", "Short Description", 10)
                .with_description("A brief summary shown on project listing cards."),
            FieldDefinition::url("projectUrl", "Project URL")
                .with_description("The URL to the live project, if available."),
            // No content block kinds exist yet, so the list accepts no elements.
            FieldDefinition::list_of("pageBuilder", "Page Content", Vec::new())
                .with_description("Add and order content blocks to build the project page."),
        ],
    )
}
