//! Mention retrieval endpoints.
//!
//! Each GET regenerates mention rows for the named parent before returning
//! them, matching a backend that materializes mentions lazily. Regeneration
//! appends; only updating the parent clears old rows.

use crate::AppState;
use crate::api::models::mentions::{
    CommentMentionsQuery, CommentUserMentionResponse, PostMentionsQuery, PostUserMentionResponse, PreviewMentionsQuery,
    PreviewUserMentionResponse,
};
use crate::errors::{Error, Result};
use crate::mentions;
use axum::{
    Json,
    extract::{Query, State},
};

#[utoipa::path(
    get,
    path = "/comment_user_mentions",
    tag = "mentions",
    summary = "List mentions in a comment",
    params(CommentMentionsQuery),
    responses(
        (status = 200, description = "Mentions in the comment", body = Vec<CommentUserMentionResponse>),
        (status = 404, description = "Comment not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_comment_mentions(
    State(state): State<AppState>,
    Query(query): Query<CommentMentionsQuery>,
) -> Result<Json<Vec<CommentUserMentionResponse>>> {
    let mut fixtures = state.store.write();
    let comment = fixtures.comments.get(query.comment_id).cloned().ok_or(Error::not_found("comment", query.comment_id))?;

    mentions::generate_comment_mentions(&mut fixtures, &comment);

    let results = fixtures
        .comment_user_mentions
        .iter()
        .filter(|m| m.comment_id == comment.id)
        .cloned()
        .map(CommentUserMentionResponse::from)
        .collect();
    Ok(Json(results))
}

#[utoipa::path(
    get,
    path = "/post_user_mentions",
    tag = "mentions",
    summary = "List mentions in a post",
    params(PostMentionsQuery),
    responses(
        (status = 200, description = "Mentions in the post", body = Vec<PostUserMentionResponse>),
        (status = 404, description = "Post not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_post_mentions(
    State(state): State<AppState>,
    Query(query): Query<PostMentionsQuery>,
) -> Result<Json<Vec<PostUserMentionResponse>>> {
    let mut fixtures = state.store.write();
    let post = fixtures.posts.get(query.post_id).cloned().ok_or(Error::not_found("post", query.post_id))?;

    mentions::generate_post_mentions(&mut fixtures, &post);

    let results = fixtures
        .post_user_mentions
        .iter()
        .filter(|m| m.post_id == post.id)
        .cloned()
        .map(PostUserMentionResponse::from)
        .collect();
    Ok(Json(results))
}

#[utoipa::path(
    get,
    path = "/preview_user_mentions",
    tag = "mentions",
    summary = "List mentions in a preview",
    params(PreviewMentionsQuery),
    responses(
        (status = 200, description = "Mentions in the preview", body = Vec<PreviewUserMentionResponse>),
        (status = 404, description = "Preview not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_preview_mentions(
    State(state): State<AppState>,
    Query(query): Query<PreviewMentionsQuery>,
) -> Result<Json<Vec<PreviewUserMentionResponse>>> {
    let mut fixtures = state.store.write();
    let preview = fixtures.previews.get(query.preview_id).cloned().ok_or(Error::not_found("preview", query.preview_id))?;

    mentions::generate_preview_mentions(&mut fixtures, &preview);

    let results = fixtures
        .preview_user_mentions
        .iter()
        .filter(|m| m.preview_id == preview.id)
        .cloned()
        .map(PreviewUserMentionResponse::from)
        .collect();
    Ok(Json(results))
}

#[cfg(test)]
mod tests {
    use crate::test_utils::*;
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    #[test_log::test(tokio::test)]
    async fn test_comment_mentions_generated_on_read() {
        let (server, _state) = create_test_app(true).await;

        // Seed comments mention @joshsmith
        let first: Value = server
            .get("/comment_user_mentions")
            .add_query_param("comment_id", 1)
            .await
            .json();
        assert_eq!(first.as_array().map(Vec::len), Some(1));
        assert_eq!(first[0]["username"], "joshsmith");
        assert_eq!(first[0]["comment_id"], 1);

        // Reads accumulate rather than replace
        let second: Value = server
            .get("/comment_user_mentions")
            .add_query_param("comment_id", 1)
            .await
            .json();
        assert_eq!(second.as_array().map(Vec::len), Some(2));
    }

    #[test_log::test(tokio::test)]
    async fn test_comment_mentions_unknown_parent() {
        let (server, _state) = create_test_app(true).await;
        server
            .get("/comment_user_mentions")
            .add_query_param("comment_id", 99)
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[test_log::test(tokio::test)]
    async fn test_post_mentions_repeated_tokens_have_distinct_offsets() {
        let (server, _state) = create_test_app(true).await;

        // Seed post 2 mentions @joshsmith twice
        let mentions: Value = server.get("/post_user_mentions").add_query_param("post_id", 2).await.json();
        let rows = mentions.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_ne!(rows[0]["indices"], rows[1]["indices"]);
    }

    #[test_log::test(tokio::test)]
    async fn test_preview_mentions() {
        let (server, _state) = create_test_app(true).await;

        let preview: Value = server
            .post("/previews")
            .json(&json!({ "markdown": "ping @begona" }))
            .await
            .json();
        let preview_id = preview["id"].as_i64().unwrap();

        let mentions: Value = server
            .get("/preview_user_mentions")
            .add_query_param("preview_id", preview_id)
            .await
            .json();
        assert_eq!(mentions.as_array().map(Vec::len), Some(1));
        assert_eq!(mentions[0]["username"], "begona");
        assert_eq!(mentions[0]["indices"], json!([5, 11]));
    }
}
