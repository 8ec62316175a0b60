//! Project endpoints, including the paginated per-project post listing.

use crate::AppState;
use crate::api::models::pagination::PaginatedResponse;
use crate::api::models::posts::{ListPostsQuery, PostResponse};
use crate::api::models::projects::{ProjectResponse, ProjectUpdate};
use crate::errors::{Error, Result};
use crate::{markdown, mentions};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;

#[utoipa::path(
    get,
    path = "/projects",
    tag = "projects",
    summary = "List projects",
    responses(
        (status = 200, description = "List of projects", body = Vec<ProjectResponse>)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<ProjectResponse>>> {
    let fixtures = state.store.read();
    let projects = fixtures.projects.iter().cloned().map(ProjectResponse::from).collect();
    Ok(Json(projects))
}

#[utoipa::path(
    get,
    path = "/projects/{project_id}",
    tag = "projects",
    summary = "Get project",
    responses(
        (status = 200, description = "Project details", body = ProjectResponse),
        (status = 404, description = "Project not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_project(State(state): State<AppState>, Path(project_id): Path<crate::types::ProjectId>) -> Result<Json<ProjectResponse>> {
    let fixtures = state.store.read();
    let project = fixtures.projects.get(project_id).ok_or(Error::not_found("project", project_id))?;
    Ok(Json(ProjectResponse::from(project.clone())))
}

#[utoipa::path(
    patch,
    path = "/projects/{project_id}",
    tag = "projects",
    summary = "Update project",
    request_body = ProjectUpdate,
    responses(
        (status = 200, description = "Updated project", body = ProjectResponse),
        (status = 404, description = "Project not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_project(
    State(state): State<AppState>,
    Path(project_id): Path<crate::types::ProjectId>,
    Json(update): Json<ProjectUpdate>,
) -> Result<Json<ProjectResponse>> {
    let mut fixtures = state.store.write();
    let project = fixtures.projects.get_mut(project_id).ok_or(Error::not_found("project", project_id))?;

    if let Some(title) = update.title {
        project.title = title;
    }
    if let Some(description) = update.description {
        project.description = Some(description);
    }
    if let Some(long_markdown) = update.long_description_markdown {
        // The backend renders the long description server-side
        project.long_description_body = Some(markdown::render(&long_markdown));
        project.long_description_markdown = Some(long_markdown);
    }
    project.updated_at = Utc::now();

    Ok(Json(ProjectResponse::from(project.clone())))
}

#[utoipa::path(
    get,
    path = "/projects/{project_id}/posts",
    tag = "projects",
    summary = "List a project's posts",
    params(ListPostsQuery),
    responses(
        (status = 200, description = "Page of posts", body = PaginatedResponse<PostResponse>),
        (status = 404, description = "Project not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_project_posts(
    State(state): State<AppState>,
    Path(project_id): Path<crate::types::ProjectId>,
    Query(query): Query<ListPostsQuery>,
) -> Result<Json<PaginatedResponse<PostResponse>>> {
    let fixtures = state.store.read();
    if fixtures.projects.get(project_id).is_none() {
        return Err(Error::not_found("project", project_id));
    }

    let posts: Vec<PostResponse> = fixtures
        .posts_for_project(project_id)
        .into_iter()
        .filter(|p| query.post_type.as_deref().is_none_or(|t| p.post_type == t))
        .filter(|p| query.status.as_deref().is_none_or(|s| p.status == s))
        .map(PostResponse::from)
        .collect();

    Ok(Json(query.page.paginate(posts)))
}

#[utoipa::path(
    get,
    path = "/projects/{project_id}/posts/{number}",
    tag = "projects",
    summary = "Get a post by its project-scoped number",
    responses(
        (status = 200, description = "Post details", body = PostResponse),
        (status = 404, description = "Project or post not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_project_post(
    State(state): State<AppState>,
    Path((project_id, number)): Path<(crate::types::ProjectId, i64)>,
) -> Result<Json<PostResponse>> {
    let mut fixtures = state.store.write();
    if fixtures.projects.get(project_id).is_none() {
        return Err(Error::not_found("project", project_id));
    }
    let post = fixtures
        .post_by_number(project_id, number)
        .cloned()
        .ok_or(Error::not_found("post", number))?;

    // Viewing a post refreshes mention annotations for its comment thread
    for comment in fixtures.comments_for_post(post.id) {
        mentions::generate_comment_mentions(&mut fixtures, &comment);
    }

    Ok(Json(PostResponse::from(post)))
}

#[cfg(test)]
mod tests {
    use crate::test_utils::*;
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    #[test_log::test(tokio::test)]
    async fn test_update_project_rerenders_long_description() {
        let (server, _state) = create_test_app(true).await;

        let body: Value = server
            .patch("/projects/1")
            .json(&json!({ "long_description_markdown": "Fresh copy" }))
            .await
            .json();

        assert_eq!(body["long_description_markdown"], "Fresh copy");
        assert_eq!(body["long_description_body"], "<p>Fresh copy</p>");
    }

    #[test_log::test(tokio::test)]
    async fn test_list_project_posts_filters_and_paginates() {
        let (server, _state) = create_test_app(true).await;

        let all: Value = server.get("/projects/1/posts").await.json();
        assert_eq!(all["data"].as_array().map(Vec::len), Some(3));
        assert_eq!(all["meta"]["total_records"], 3);
        assert_eq!(all["meta"]["current_page"], 1);

        let issues: Value = server.get("/projects/1/posts").add_query_param("post_type", "issue").await.json();
        assert_eq!(issues["data"].as_array().map(Vec::len), Some(1));
        assert_eq!(issues["data"][0]["post_type"], "issue");

        let page: Value = server
            .get("/projects/1/posts")
            .add_query_param("page[number]", 2)
            .add_query_param("page[size]", 2)
            .await
            .json();
        assert_eq!(page["data"].as_array().map(Vec::len), Some(1));
        assert_eq!(page["meta"]["total_pages"], 2);
        assert_eq!(page["meta"]["page_size"], 2);
        assert_eq!(page["meta"]["current_page"], 2);
    }

    #[test_log::test(tokio::test)]
    async fn test_get_project_post_by_number() {
        let (server, state) = create_test_app(true).await;

        let body: Value = server.get("/projects/1/posts/2").await.json();
        assert_eq!(body["number"], 2);

        // Fetching the post refreshes mentions for its comments
        let post_id = body["id"].as_i64().unwrap();
        let fixtures = state.store.read();
        assert!(fixtures.comment_user_mentions.iter().any(|m| m.post_id == post_id));
        drop(fixtures);

        server.get("/projects/1/posts/99").await.assert_status(StatusCode::NOT_FOUND);
        server.get("/projects/9/posts/1").await.assert_status(StatusCode::NOT_FOUND);
    }
}
