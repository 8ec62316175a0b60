//! API request/response models for mention annotations.

use crate::store::models::mentions::{CommentUserMention, PostUserMention, PreviewUserMention};
use crate::types::{CommentId, PostId, PreviewId, RecordId, UserId};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentUserMentionResponse {
    pub id: RecordId,
    pub comment_id: CommentId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub username: String,
    /// `[start, end]` character offsets into the comment body, end inclusive
    #[schema(value_type = Vec<i64>)]
    pub indices: [i64; 2],
}

impl From<CommentUserMention> for CommentUserMentionResponse {
    fn from(m: CommentUserMention) -> Self {
        Self {
            id: m.id,
            comment_id: m.comment_id,
            post_id: m.post_id,
            user_id: m.user_id,
            username: m.username,
            indices: m.indices,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostUserMentionResponse {
    pub id: RecordId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub username: String,
    #[schema(value_type = Vec<i64>)]
    pub indices: [i64; 2],
}

impl From<PostUserMention> for PostUserMentionResponse {
    fn from(m: PostUserMention) -> Self {
        Self {
            id: m.id,
            post_id: m.post_id,
            user_id: m.user_id,
            username: m.username,
            indices: m.indices,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PreviewUserMentionResponse {
    pub id: RecordId,
    pub preview_id: PreviewId,
    pub user_id: UserId,
    pub username: String,
    #[schema(value_type = Vec<i64>)]
    pub indices: [i64; 2],
}

impl From<PreviewUserMention> for PreviewUserMentionResponse {
    fn from(m: PreviewUserMention) -> Self {
        Self {
            id: m.id,
            preview_id: m.preview_id,
            user_id: m.user_id,
            username: m.username,
            indices: m.indices,
        }
    }
}

/// Query parameters naming the parent comment.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct CommentMentionsQuery {
    pub comment_id: CommentId,
}

/// Query parameters naming the parent post.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct PostMentionsQuery {
    pub post_id: PostId,
}

/// Query parameters naming the parent preview.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct PreviewMentionsQuery {
    pub preview_id: PreviewId,
}
