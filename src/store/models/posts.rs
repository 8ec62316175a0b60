//! Post, comment, and preview fixture records.
//!
//! All three carry a raw `markdown` field alongside the mock-rendered `body`
//! (see [`crate::markdown`]).

use crate::store::Record;
use crate::types::{CommentId, PostId, PreviewId, ProjectId, RecordId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub project_id: ProjectId,
    pub user_id: UserId,
    /// Display number, auto-incremented within the parent project at creation
    /// time. Never reused or compacted on deletion.
    pub number: i64,
    pub title: String,
    /// "issue", "task", or "idea"
    pub post_type: String,
    /// "open" or "closed"
    pub status: String,
    pub markdown: String,
    pub body: String,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Post {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub user_id: Option<UserId>,
    pub markdown: String,
    pub body: String,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Comment {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Throwaway render of a markdown draft, owned by the current user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preview {
    pub id: PreviewId,
    pub user_id: Option<UserId>,
    pub markdown: String,
    pub body: String,
    pub inserted_at: DateTime<Utc>,
}

impl Record for Preview {
    fn id(&self) -> RecordId {
        self.id
    }
}
