//! Project fixture records.

use crate::store::Record;
use crate::types::{OrganizationId, ProjectId, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub organization_id: OrganizationId,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub long_description_markdown: Option<String>,
    /// Rendered from `long_description_markdown` on update (mock rendering)
    pub long_description_body: Option<String>,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Project {
    fn id(&self) -> RecordId {
        self.id
    }
}
