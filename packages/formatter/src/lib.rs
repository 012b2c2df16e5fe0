// ABOUTME: Markup for the project listing view
// ABOUTME: Cards with placeholder images, detail view with uploaded file sizes, empty state

use folio_core::{html_escape, FileMetadata, Project};

/// Image shown on a card when the project has none
pub const CARD_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200?text=Project+Image";

/// Image shown in the detail view when the project has none
pub const DETAIL_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/600x400?text=Project+Image";

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human readable file size using 1024-based units and at most two decimals
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[unit])
}

fn tech_tags(project: &Project) -> String {
    project
        .technology_tags()
        .iter()
        .map(|tech| format!("<span class=\"tech-tag\">{}</span>", html_escape(tech)))
        .collect()
}

/// Card for the project grid. Actions are addressed by `data-action` and
/// `data-index` so the view layer can dispatch them without inline handlers.
pub fn format_project_card(project: &Project, index: usize) -> String {
    let title = html_escape(&project.title);
    let image = project
        .image
        .as_deref()
        .map(html_escape)
        .unwrap_or_else(|| CARD_PLACEHOLDER_IMAGE.to_string());

    format!(
        r#"<div class="project-card" data-project-id="{id}">
    <img src="{image}" alt="{title}" class="project-image">
    <div class="project-info">
        <h3 class="project-title">{title}</h3>
        <p class="project-description">{description}</p>
        <div class="project-tech">{tags}</div>
        <div class="project-actions">
            <button class="btn-primary" data-action="preview" data-index="{index}">Preview</button>
            <button class="btn-secondary" data-action="edit" data-index="{index}">Edit</button>
            <button class="btn-secondary" data-action="delete" data-index="{index}">Delete</button>
        </div>
    </div>
</div>
"#,
        id = project.id,
        image = image,
        title = title,
        description = html_escape(&project.description),
        tags = tech_tags(project),
        index = index,
    )
}

/// Every card in store order, or the empty state when there are none
pub fn format_projects_grid(projects: &[Project]) -> String {
    if projects.is_empty() {
        return r#"<div class="empty-state">
    <h3>No projects yet</h3>
    <p>Add your first project to get started!</p>
</div>
"#
        .to_string();
    }

    projects
        .iter()
        .enumerate()
        .map(|(index, project)| format_project_card(project, index))
        .collect()
}

fn format_files(files: &[FileMetadata]) -> String {
    if files.is_empty() {
        return String::new();
    }

    let items: String = files
        .iter()
        .map(|file| {
            format!(
                "        <li>{} <span class=\"file-size\">({})</span></li>\n",
                html_escape(&file.name),
                format_file_size(file.size)
            )
        })
        .collect();

    format!(
        "<div class=\"project-files\">\n    <h4>Uploaded Files:</h4>\n    <ul>\n{}    </ul>\n</div>\n",
        items
    )
}

/// Detail view shown when a project is previewed
pub fn format_project_details(project: &Project) -> String {
    let title = html_escape(&project.title);
    let image = project
        .image
        .as_deref()
        .map(html_escape)
        .unwrap_or_else(|| DETAIL_PLACEHOLDER_IMAGE.to_string());

    let mut html = String::new();
    html.push_str(&format!("<h2>{}</h2>\n", title));
    html.push_str(&format!(
        "<img src=\"{}\" alt=\"{}\" class=\"project-detail-image\">\n",
        image, title
    ));
    html.push_str(&format!(
        "<p><strong>Description:</strong> {}</p>\n",
        html_escape(&project.description)
    ));
    html.push_str(&format!(
        "<p><strong>Technologies:</strong> {}</p>\n",
        html_escape(&project.technologies)
    ));
    if let Some(ref link) = project.link {
        let link = html_escape(link);
        html.push_str(&format!(
            "<p><strong>Link:</strong> <a href=\"{0}\" target=\"_blank\">{0}</a></p>\n",
            link
        ));
    }
    html.push_str(&format_files(&project.files));
    html.push_str(&format!(
        "<div class=\"project-counters\">\n    <p><strong>Views:</strong> {}</p>\n    <p><strong>Likes:</strong> {}</p>\n</div>\n",
        project.views, project.likes
    ));
    html
}
