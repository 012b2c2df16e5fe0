// ABOUTME: Integration tests for portfolio rendering
// ABOUTME: Fallback equivalence, determinism, tag chips and project ordering

use chrono::{TimeZone, Utc};
use folio_core::{Project, ProjectDraft};
use folio_templates::{render_final, render_preview, Template};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn site_project() -> Project {
    Project::from_draft(
        1_700_000_000_000,
        ProjectDraft::new("Site")
            .description("Personal landing page")
            .technologies("HTML, CSS"),
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    )
}

fn sample_projects() -> Vec<Project> {
    let created = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    vec![
        Project::from_draft(
            2,
            ProjectDraft::new("E-commerce App")
                .description("Shopping cart")
                .technologies("React, Node.js, MongoDB")
                .link("https://example.com/shop")
                .image("https://example.com/shop.png"),
            created,
        ),
        site_project(),
    ]
}

#[test]
fn test_unknown_template_renders_like_default() {
    let projects = sample_projects();
    let fallback = render_final("My Work", &projects, "unknown-id");
    let default = render_final("My Work", &projects, Template::default().as_str());
    assert_eq!(fallback, default);
}

#[test]
fn test_render_is_deterministic() {
    let projects = sample_projects();
    for template in Template::ALL {
        let first = render_final("My Work", &projects, template.as_str());
        let second = render_final("My Work", &projects, template.as_str());
        assert_eq!(first, second);
    }
}

#[test]
fn test_technologies_render_as_separate_chips_without_placeholder() {
    let html = render_final("Portfolio", &[site_project()], "modern");

    assert!(html.contains(r#"<span class="tech-tag">HTML</span>"#));
    assert!(html.contains(r#"<span class="tech-tag">CSS</span>"#));
    assert!(!html.contains("HTML, CSS"));
    assert!(!html.contains("<img"));
    assert!(!html.contains("placeholder"));
}

#[test]
fn test_projects_render_in_given_order() {
    let projects = sample_projects();
    let html = render_final("Portfolio", &projects, "professional");

    let first = html.find("<h3>E-commerce App</h3>").unwrap();
    let second = html.find("<h3>Site</h3>").unwrap();
    assert!(first < second);

    let reversed: Vec<Project> = projects.into_iter().rev().collect();
    let html = render_final("Portfolio", &reversed, "professional");
    assert!(html.find("<h3>Site</h3>").unwrap() < html.find("<h3>E-commerce App</h3>").unwrap());
}

#[test]
fn test_empty_project_list_renders_title_only_document() {
    let html = render_final("Just Me", &[], "minimal");
    assert!(html.contains("<title>Just Me</title>"));
    assert!(html.contains("<h1>Just Me</h1>"));
    assert!(html.contains("Generated with minimal template"));
    assert!(!html.contains(r#"<div class="project">"#));
}

#[rstest]
#[case(Template::Modern, "#4CAF50")]
#[case(Template::Creative, "linear-gradient(135deg, #ff6b6b, #4ecdc4)")]
#[case(Template::Professional, "#2196F3")]
#[case(Template::Minimal, "max-width: 800px")]
fn test_each_template_embeds_its_styles(#[case] template: Template, #[case] marker: &str) {
    let html = render_final("Portfolio", &[], template.as_str());
    assert!(html.contains(marker), "{} should contain {}", template, marker);
    assert!(html.contains(&format!("Generated with {} template", template)));
}

#[rstest]
#[case("modern", "Clean and minimalist design")]
#[case("professional", "Corporate and elegant design")]
#[case("does-not-exist", "Clean and minimalist design")]
fn test_preview_tagline(#[case] id: &str, #[case] tagline: &str) {
    let html = render_preview(id);
    assert!(html.contains(tagline));
    assert!(html.contains("<h3>Sample Project</h3>"));
}

#[test]
fn test_documents_are_standalone() {
    let html = render_final("Portfolio", &sample_projects(), "creative");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(!html.contains("<link "));
    assert!(!html.contains("<script"));
    // Only user supplied URLs are external
    assert!(html.contains("https://example.com/shop.png"));
}
