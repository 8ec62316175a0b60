//! Post, comment, and preview endpoints.
//!
//! Creation and update render `markdown` into `body` the way the real
//! backend would, and keep mention rows consistent with body changes.

use crate::AppState;
use crate::api::models::posts::{
    CommentCreate, CommentResponse, CommentUpdate, PostCreate, PostResponse, PostUpdate, PreviewCreate, PreviewResponse,
};
use crate::errors::{Error, Result};
use crate::store::models::posts::{Comment, Post, Preview};
use crate::types::{CommentId, PostId};
use crate::{markdown, mentions};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;

#[utoipa::path(
    post,
    path = "/posts",
    tag = "posts",
    summary = "Create post",
    request_body = PostCreate,
    responses(
        (status = 201, description = "Post created", body = PostResponse),
        (status = 404, description = "Project not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_post(State(state): State<AppState>, Json(create): Json<PostCreate>) -> Result<(StatusCode, Json<PostResponse>)> {
    let mut fixtures = state.store.write();
    if fixtures.projects.get(create.project_id).is_none() {
        return Err(Error::not_found("project", create.project_id));
    }

    // Display numbers auto-increment within the parent project
    let number = fixtures.next_post_number(create.project_id);
    let now = Utc::now();
    let post = fixtures.posts.insert(|id| Post {
        id,
        project_id: create.project_id,
        user_id: create.user_id,
        number,
        title: create.title.clone(),
        post_type: create.post_type.clone(),
        status: "open".to_string(),
        markdown: create.markdown.clone(),
        body: markdown::render(&create.markdown),
        inserted_at: now,
        updated_at: now,
    });

    Ok((StatusCode::CREATED, Json(PostResponse::from(post))))
}

#[utoipa::path(
    patch,
    path = "/posts/{post_id}",
    tag = "posts",
    summary = "Update post",
    request_body = PostUpdate,
    responses(
        (status = 200, description = "Updated post", body = PostResponse),
        (status = 404, description = "Post not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_post(
    State(state): State<AppState>,
    Path(post_id): Path<PostId>,
    Json(update): Json<PostUpdate>,
) -> Result<Json<PostResponse>> {
    let mut fixtures = state.store.write();
    let post = fixtures.posts.get_mut(post_id).ok_or(Error::not_found("post", post_id))?;

    if let Some(title) = update.title {
        post.title = title;
    }
    if let Some(post_type) = update.post_type {
        post.post_type = post_type;
    }
    if let Some(status) = update.status {
        post.status = status;
    }
    if let Some(new_markdown) = update.markdown {
        post.body = markdown::render(&new_markdown);
        post.markdown = new_markdown;
    }
    post.updated_at = Utc::now();
    let post = post.clone();

    // The edited body invalidates previously recorded mention offsets
    mentions::clear_post_mentions(&mut fixtures, post_id);

    Ok(Json(PostResponse::from(post)))
}

#[utoipa::path(
    get,
    path = "/posts/{post_id}/comments",
    tag = "posts",
    summary = "List a post's comments",
    responses(
        (status = 200, description = "List of comments", body = Vec<CommentResponse>),
        (status = 404, description = "Post not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_post_comments(State(state): State<AppState>, Path(post_id): Path<PostId>) -> Result<Json<Vec<CommentResponse>>> {
    let fixtures = state.store.read();
    if fixtures.posts.get(post_id).is_none() {
        return Err(Error::not_found("post", post_id));
    }
    let comments = fixtures
        .comments_for_post(post_id)
        .into_iter()
        .map(CommentResponse::from)
        .collect();
    Ok(Json(comments))
}

#[utoipa::path(
    post,
    path = "/comments",
    tag = "posts",
    summary = "Create comment",
    request_body = CommentCreate,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse),
        (status = 404, description = "Post not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_comment(
    State(state): State<AppState>,
    Json(create): Json<CommentCreate>,
) -> Result<(StatusCode, Json<CommentResponse>)> {
    let mut fixtures = state.store.write();
    if fixtures.posts.get(create.post_id).is_none() {
        return Err(Error::not_found("post", create.post_id));
    }

    let now = Utc::now();
    let comment = fixtures.comments.insert(|id| Comment {
        id,
        post_id: create.post_id,
        user_id: create.user_id,
        markdown: create.markdown.clone(),
        body: markdown::render(&create.markdown),
        inserted_at: now,
        updated_at: now,
    });

    Ok((StatusCode::CREATED, Json(CommentResponse::from(comment))))
}

#[utoipa::path(
    patch,
    path = "/comments/{comment_id}",
    tag = "posts",
    summary = "Update comment",
    request_body = CommentUpdate,
    responses(
        (status = 200, description = "Updated comment", body = CommentResponse),
        (status = 404, description = "Comment not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<CommentId>,
    Json(update): Json<CommentUpdate>,
) -> Result<Json<CommentResponse>> {
    let mut fixtures = state.store.write();
    let comment = fixtures.comments.get_mut(comment_id).ok_or(Error::not_found("comment", comment_id))?;

    if let Some(new_markdown) = update.markdown {
        comment.body = markdown::render(&new_markdown);
        comment.markdown = new_markdown;
    }
    comment.updated_at = Utc::now();
    let comment = comment.clone();

    // The edited body invalidates previously recorded mention offsets
    mentions::clear_comment_mentions(&mut fixtures, comment_id);

    Ok(Json(CommentResponse::from(comment)))
}

#[utoipa::path(
    post,
    path = "/previews",
    tag = "posts",
    summary = "Create markdown preview",
    request_body = PreviewCreate,
    responses(
        (status = 201, description = "Preview created", body = PreviewResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_preview(
    State(state): State<AppState>,
    Json(create): Json<PreviewCreate>,
) -> Result<(StatusCode, Json<PreviewResponse>)> {
    let mut fixtures = state.store.write();

    // Previews belong to the current user when one exists
    let user_id = fixtures.users.first().map(|u| u.id);
    let preview = fixtures.previews.insert(|id| Preview {
        id,
        user_id,
        markdown: create.markdown.clone(),
        body: markdown::render(&create.markdown),
        inserted_at: Utc::now(),
    });

    Ok((StatusCode::CREATED, Json(PreviewResponse::from(preview))))
}
