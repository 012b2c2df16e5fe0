use chrono::{DateTime, Utc};
use folio_core::Project;

/// Sample projects shown to a first-time user
pub fn demo_projects(created_at: DateTime<Utc>) -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Portfolio Website".to_string(),
            description: "A responsive portfolio website built with modern web technologies."
                .to_string(),
            technologies: "HTML, CSS, JavaScript".to_string(),
            link: Some("https://example.com/portfolio".to_string()),
            image: Some(
                "https://via.placeholder.com/300x200/0f56a7/ffffff?text=Portfolio".to_string(),
            ),
            files: Vec::new(),
            views: 150,
            likes: 25,
            created_at,
        },
        Project {
            id: 2,
            title: "E-commerce App".to_string(),
            description:
                "A full-featured e-commerce application with shopping cart functionality."
                    .to_string(),
            technologies: "React, Node.js, MongoDB".to_string(),
            link: Some("https://example.com/shop".to_string()),
            image: Some(
                "https://via.placeholder.com/300x200/17d7ff/ffffff?text=E-commerce".to_string(),
            ),
            files: Vec::new(),
            views: 320,
            likes: 45,
            created_at,
        },
    ]
}
