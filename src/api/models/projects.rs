//! API request/response models for projects.

use crate::store::models::projects::Project;
use crate::types::{OrganizationId, ProjectId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectResponse {
    pub id: ProjectId,
    pub organization_id: OrganizationId,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub long_description_markdown: Option<String>,
    pub long_description_body: Option<String>,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            organization_id: project.organization_id,
            slug: project.slug,
            title: project.title,
            description: project.description,
            long_description_markdown: project.long_description_markdown,
            long_description_body: project.long_description_body,
            inserted_at: project.inserted_at,
            updated_at: project.updated_at,
        }
    }
}

/// Body of a project update. Missing fields are left untouched; setting
/// `long_description_markdown` re-renders `long_description_body`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub long_description_markdown: Option<String>,
}
