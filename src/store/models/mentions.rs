//! Derived mention annotation records.
//!
//! A mention links an `@username` occurrence in a text body to the user it
//! matched. `indices` is a `[start, end]` pair of character offsets into the
//! parent body, end inclusive. Mentions are regenerated on read (see
//! [`crate::mentions`]) rather than maintained incrementally.

use crate::store::Record;
use crate::types::{CommentId, PostId, PreviewId, RecordId, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentUserMention {
    pub id: RecordId,
    pub comment_id: CommentId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub username: String,
    pub indices: [i64; 2],
}

impl Record for CommentUserMention {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostUserMention {
    pub id: RecordId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub username: String,
    pub indices: [i64; 2],
}

impl Record for PostUserMention {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewUserMention {
    pub id: RecordId,
    pub preview_id: PreviewId,
    pub user_id: UserId,
    pub username: String,
    pub indices: [i64; 2],
}

impl Record for PreviewUserMention {
    fn id(&self) -> RecordId {
        self.id
    }
}
