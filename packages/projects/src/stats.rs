use folio_core::Project;
use serde::Serialize;

/// Totals shown on the dashboard overview
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProjectStats {
    #[serde(rename = "totalProjects")]
    pub total_projects: usize,
    #[serde(rename = "totalViews")]
    pub total_views: u64,
    #[serde(rename = "totalLikes")]
    pub total_likes: u64,
}

impl ProjectStats {
    pub fn from_projects(projects: &[Project]) -> Self {
        ProjectStats {
            total_projects: projects.len(),
            total_views: projects.iter().map(|p| p.views).sum(),
            total_likes: projects.iter().map(|p| p.likes).sum(),
        }
    }
}
