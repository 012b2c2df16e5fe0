// ABOUTME: HTML rendering for template previews and generated portfolios
// ABOUTME: Pure functions; user text is escaped, unknown templates fall back silently

use folio_core::{html_escape, Project};

use crate::styles::{final_css, preview_css};
use crate::template::Template;

const PREVIEW_DATA_URL_PREFIX: &str = "data:text/html;charset=utf-8,";

/// Minimal standalone document showing one sample project in `template_id`
pub fn render_preview(template_id: &str) -> String {
    Template::resolve(template_id).render_preview()
}

/// Preview document wrapped in a data URL suitable for an iframe `src`
pub fn preview_data_url(template_id: &str) -> String {
    format!(
        "{}{}",
        PREVIEW_DATA_URL_PREFIX,
        urlencoding::encode(&render_preview(template_id))
    )
}

/// Full portfolio document: header followed by one block per project, in order
pub fn render_final(title: &str, projects: &[Project], template_id: &str) -> String {
    Template::resolve(template_id).render_final(title, projects)
}

impl Template {
    pub fn render_preview(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <title>{label} Portfolio Preview</title>
    <meta charset="UTF-8">
    <style>{css}    </style>
</head>
<body>
    <div class="header">
        <h1>{label} Portfolio Preview</h1>
        <p>{tagline}</p>
    </div>
    <div class="project">
        <h3>Sample Project</h3>
        <p>This is how your projects will appear in the {id} template.</p>
    </div>
</body>
</html>
"#,
            label = self.label(),
            css = preview_css(*self),
            tagline = self.tagline(),
            id = self.as_str(),
        )
    }

    pub fn render_final(&self, title: &str, projects: &[Project]) -> String {
        let projects_html: String = projects.iter().map(render_project).collect();

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <title>{title}</title>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <style>{css}    </style>
</head>
<body>
    <div class="header">
        <h1>{title}</h1>
        <p>Generated with {id} template</p>
    </div>
    <div class="projects">
{projects_html}    </div>
</body>
</html>
"#,
            title = html_escape(title),
            css = final_css(*self),
            id = self.as_str(),
            projects_html = projects_html,
        )
    }
}

fn render_project(project: &Project) -> String {
    let title = html_escape(&project.title);
    let mut html = String::new();

    html.push_str("        <div class=\"project\">\n");
    html.push_str(&format!("            <h3>{}</h3>\n", title));
    html.push_str(&format!(
        "            <p>{}</p>\n",
        html_escape(&project.description)
    ));

    let tags: String = project
        .technology_tags()
        .iter()
        .map(|tag| format!("<span class=\"tech-tag\">{}</span>", html_escape(tag)))
        .collect();
    html.push_str(&format!(
        "            <div class=\"technologies\"><strong>Technologies:</strong> {}</div>\n",
        tags
    ));

    if let Some(ref link) = project.link {
        let link = html_escape(link);
        html.push_str(&format!(
            "            <p><strong>Link:</strong> <a href=\"{0}\">{0}</a></p>\n",
            link
        ));
    }

    if let Some(ref image) = project.image {
        html.push_str(&format!(
            "            <img src=\"{}\" alt=\"{}\" style=\"max-width: 100%; height: auto;\">\n",
            html_escape(image),
            title
        ));
    }

    html.push_str("        </div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use folio_core::ProjectDraft;

    fn project(id: i64, draft: ProjectDraft) -> Project {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        Project::from_draft(id, draft, created)
    }

    #[test]
    fn test_render_project_omits_absent_link_and_image() {
        let html = render_project(&project(1, ProjectDraft::new("Site")));
        assert!(!html.contains("<a href"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_render_project_includes_link_and_image() {
        let html = render_project(&project(
            1,
            ProjectDraft::new("Site")
                .link("https://example.com")
                .image("https://example.com/shot.png"),
        ));
        assert!(html.contains(r#"<a href="https://example.com">https://example.com</a>"#));
        assert!(html.contains(r#"<img src="https://example.com/shot.png" alt="Site""#));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let html = render_final(
            "<script>alert(1)</script>",
            &[project(1, ProjectDraft::new("A & B").technologies("C++, <T>"))],
            "modern",
        );
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<h3>A &amp; B</h3>"));
        assert!(html.contains(r#"<span class="tech-tag">&lt;T&gt;</span>"#));
    }

    #[test]
    fn test_preview_mentions_template() {
        let html = render_preview("creative");
        assert!(html.contains("<h1>Creative Portfolio Preview</h1>"));
        assert!(html.contains("Bold and vibrant design"));
        assert!(html.contains("appear in the creative template"));
    }

    #[test]
    fn test_preview_data_url_is_percent_encoded() {
        let url = preview_data_url("minimal");
        assert!(url.starts_with("data:text/html;charset=utf-8,"));
        assert!(!url[PREVIEW_DATA_URL_PREFIX.len()..].contains(' '));
        assert!(url.contains("Minimal%20Portfolio%20Preview"));
    }
}
