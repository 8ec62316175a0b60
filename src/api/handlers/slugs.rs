//! Root-level slug resolution for organization pages.
//!
//! These routes sit underneath the static API routes; the router only falls
//! through to them when no fixed segment matches. A slug colliding with a
//! known route name indicates a routing mistake and is logged loudly.

use crate::AppState;
use crate::api::models::organizations::SluggedRouteResponse;
use crate::api::models::projects::ProjectResponse;
use crate::errors::{Error, Result};
use axum::{
    Json,
    extract::{Path, State},
};

/// Resource names served by fixed routes; needs updating when adding new routes.
const API_ROUTE_NAMES: &[&str] = &[
    "categories",
    "comment_user_mentions",
    "comments",
    "organizations",
    "post_user_mentions",
    "posts",
    "previews",
    "projects",
    "project_categories",
    "slugged_routes",
    "user_categories",
    "users",
];

fn warn_on_route_collision(slug: &str) {
    if API_ROUTE_NAMES.contains(&slug) {
        tracing::error!("API route name '{slug}' reached the slug fallback handler");
    }
}

#[utoipa::path(
    get,
    path = "/{slug}",
    tag = "slugs",
    summary = "Resolve an organization slug",
    responses(
        (status = 200, description = "Slugged route details", body = SluggedRouteResponse),
        (status = 404, description = "Slug not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_slugged_route(State(state): State<AppState>, Path(slug): Path<String>) -> Result<Json<SluggedRouteResponse>> {
    warn_on_route_collision(&slug);

    let fixtures = state.store.read();
    let route = fixtures
        .slugged_route_by_slug(&slug)
        .ok_or_else(|| Error::not_found("slugged route", &slug))?;
    Ok(Json(SluggedRouteResponse::from(route.clone())))
}

#[utoipa::path(
    get,
    path = "/{slug}/projects",
    tag = "slugs",
    summary = "List an organization's projects by slug",
    responses(
        (status = 200, description = "The organization's projects", body = Vec<ProjectResponse>),
        (status = 404, description = "Organization not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_organization_projects(State(state): State<AppState>, Path(slug): Path<String>) -> Result<Json<Vec<ProjectResponse>>> {
    let fixtures = state.store.read();
    let organization = fixtures
        .organization_by_slug(&slug)
        .ok_or_else(|| Error::not_found("organization", &slug))?;
    let projects = fixtures
        .projects
        .iter()
        .filter(|p| p.organization_id == organization.id)
        .cloned()
        .map(ProjectResponse::from)
        .collect();
    Ok(Json(projects))
}

#[utoipa::path(
    get,
    path = "/{slug}/{project_slug}",
    tag = "slugs",
    summary = "Resolve a project by organization and project slug",
    responses(
        (status = 200, description = "Project details", body = ProjectResponse),
        (status = 404, description = "Slug or project not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_organization_project(
    State(state): State<AppState>,
    Path((slug, project_slug)): Path<(String, String)>,
) -> Result<Json<ProjectResponse>> {
    warn_on_route_collision(&slug);

    let fixtures = state.store.read();
    let route = fixtures
        .slugged_route_by_slug(&slug)
        .ok_or_else(|| Error::not_found("slugged route", &slug))?;
    let project = fixtures
        .projects
        .iter()
        .find(|p| p.organization_id == route.organization_id && p.slug == project_slug)
        .ok_or_else(|| Error::not_found("project", &project_slug))?;
    Ok(Json(ProjectResponse::from(project.clone())))
}

#[cfg(test)]
mod tests {
    use crate::test_utils::*;
    use axum::http::StatusCode;
    use serde_json::Value;

    #[test_log::test(tokio::test)]
    async fn test_resolve_organization_slug() {
        let (server, _state) = create_test_app(true).await;

        let body: Value = server.get("/code-corps").await.json();
        assert_eq!(body["slug"], "code-corps");
        assert_eq!(body["organization_id"], 1);

        server.get("/no-such-org").await.assert_status(StatusCode::NOT_FOUND);
    }

    #[test_log::test(tokio::test)]
    async fn test_list_projects_by_organization_slug() {
        let (server, _state) = create_test_app(true).await;

        let body: Value = server.get("/code-corps/projects").await.json();
        assert_eq!(body.as_array().map(Vec::len), Some(1));
        assert_eq!(body[0]["slug"], "code-corps-ember");
    }

    #[test_log::test(tokio::test)]
    async fn test_resolve_project_by_slug_pair() {
        let (server, _state) = create_test_app(true).await;

        let body: Value = server.get("/code-corps/code-corps-ember").await.json();
        assert_eq!(body["title"], "Code Corps Ember");

        server.get("/code-corps/unknown").await.assert_status(StatusCode::NOT_FOUND);
    }

    #[test_log::test(tokio::test)]
    async fn test_static_routes_win_over_slug_fallback() {
        let (server, _state) = create_test_app(true).await;

        // "/projects" must hit the project listing, not slug resolution
        let body: Value = server.get("/projects").await.json();
        assert!(body.is_array());
    }
}
