//! API request/response models for posts, comments, and previews.

use crate::api::models::pagination::PageParams;
use crate::store::models::posts::{Comment, Post, Preview};
use crate::types::{CommentId, PostId, PreviewId, ProjectId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostResponse {
    pub id: PostId,
    pub project_id: ProjectId,
    pub user_id: UserId,
    /// Project-scoped display number
    pub number: i64,
    pub title: String,
    pub post_type: String,
    pub status: String,
    pub markdown: String,
    pub body: String,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            project_id: post.project_id,
            user_id: post.user_id,
            number: post.number,
            title: post.title,
            post_type: post.post_type,
            status: post.status,
            markdown: post.markdown,
            body: post.body,
            inserted_at: post.inserted_at,
            updated_at: post.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PostCreate {
    pub project_id: ProjectId,
    pub user_id: UserId,
    pub title: String,
    #[serde(default = "default_post_type")]
    pub post_type: String,
    pub markdown: String,
}

fn default_post_type() -> String {
    "task".to_string()
}

/// Body of a post update. Setting `markdown` re-renders `body` and drops the
/// post's stale mention rows.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub post_type: Option<String>,
    pub status: Option<String>,
    pub markdown: Option<String>,
}

/// Query parameters for listing a project's posts.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ListPostsQuery {
    /// Filter by post type ("issue", "task", "idea")
    pub post_type: Option<String>,
    /// Filter by status ("open", "closed")
    pub status: Option<String>,
    #[serde(flatten)]
    #[param(inline)]
    pub page: PageParams,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub id: CommentId,
    pub post_id: PostId,
    pub user_id: Option<UserId>,
    pub markdown: String,
    pub body: String,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            user_id: comment.user_id,
            markdown: comment.markdown,
            body: comment.body,
            inserted_at: comment.inserted_at,
            updated_at: comment.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CommentCreate {
    pub post_id: PostId,
    pub user_id: Option<UserId>,
    pub markdown: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CommentUpdate {
    pub markdown: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PreviewResponse {
    pub id: PreviewId,
    pub user_id: Option<UserId>,
    pub markdown: String,
    pub body: String,
    pub inserted_at: DateTime<Utc>,
}

impl From<Preview> for PreviewResponse {
    fn from(preview: Preview) -> Self {
        Self {
            id: preview.id,
            user_id: preview.user_id,
            markdown: preview.markdown,
            body: preview.body,
            inserted_at: preview.inserted_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PreviewCreate {
    pub markdown: String,
}
