//! Category, skill, and role endpoints, plus the per-user join records
//! created during onboarding.

use crate::AppState;
use crate::api::models::taxonomy::{
    CategoryResponse, RoleResponse, SkillResponse, UserCategoryCreate, UserCategoryResponse, UserRoleCreate, UserRoleResponse,
    UserSkillCreate, UserSkillResponse,
};
use crate::errors::{Error, Result};
use crate::store::models::taxonomy::{UserCategory, UserRole, UserSkill};
use crate::types::{RecordId, SkillId};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

#[utoipa::path(
    get,
    path = "/categories",
    tag = "taxonomy",
    summary = "List categories",
    responses(
        (status = 200, description = "List of categories", body = Vec<CategoryResponse>)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<CategoryResponse>>> {
    let fixtures = state.store.read();
    Ok(Json(fixtures.categories.iter().cloned().map(CategoryResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/skills",
    tag = "taxonomy",
    summary = "List skills",
    responses(
        (status = 200, description = "List of skills", body = Vec<SkillResponse>)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_skills(State(state): State<AppState>) -> Result<Json<Vec<SkillResponse>>> {
    let fixtures = state.store.read();
    Ok(Json(fixtures.skills.iter().cloned().map(SkillResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/skills/{skill_id}",
    tag = "taxonomy",
    summary = "Get skill",
    responses(
        (status = 200, description = "Skill details", body = SkillResponse),
        (status = 404, description = "Skill not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_skill(State(state): State<AppState>, Path(skill_id): Path<SkillId>) -> Result<Json<SkillResponse>> {
    let fixtures = state.store.read();
    let skill = fixtures.skills.get(skill_id).ok_or(Error::not_found("skill", skill_id))?;
    Ok(Json(SkillResponse::from(skill.clone())))
}

#[utoipa::path(
    get,
    path = "/roles",
    tag = "taxonomy",
    summary = "List roles",
    responses(
        (status = 200, description = "List of roles", body = Vec<RoleResponse>)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_roles(State(state): State<AppState>) -> Result<Json<Vec<RoleResponse>>> {
    let fixtures = state.store.read();
    Ok(Json(fixtures.roles.iter().cloned().map(RoleResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/user_categories",
    tag = "taxonomy",
    summary = "List user categories",
    responses(
        (status = 200, description = "List of user categories", body = Vec<UserCategoryResponse>)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_user_categories(State(state): State<AppState>) -> Result<Json<Vec<UserCategoryResponse>>> {
    let fixtures = state.store.read();
    Ok(Json(fixtures.user_categories.iter().cloned().map(UserCategoryResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/user_categories",
    tag = "taxonomy",
    summary = "Create user category",
    request_body = UserCategoryCreate,
    responses(
        (status = 201, description = "User category created", body = UserCategoryResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_user_category(
    State(state): State<AppState>,
    Json(create): Json<UserCategoryCreate>,
) -> Result<(StatusCode, Json<UserCategoryResponse>)> {
    let mut fixtures = state.store.write();
    let record = fixtures.user_categories.insert(|id| UserCategory {
        id,
        user_id: create.user_id,
        category_id: create.category_id,
    });
    Ok((StatusCode::CREATED, Json(UserCategoryResponse::from(record))))
}

#[utoipa::path(
    get,
    path = "/user_categories/{id}",
    tag = "taxonomy",
    summary = "Get user category",
    responses(
        (status = 200, description = "User category details", body = UserCategoryResponse),
        (status = 404, description = "User category not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_user_category(State(state): State<AppState>, Path(id): Path<RecordId>) -> Result<Json<UserCategoryResponse>> {
    let fixtures = state.store.read();
    let record = fixtures.user_categories.get(id).ok_or(Error::not_found("user category", id))?;
    Ok(Json(UserCategoryResponse::from(record.clone())))
}

#[utoipa::path(
    delete,
    path = "/user_categories/{id}",
    tag = "taxonomy",
    summary = "Delete user category",
    responses(
        (status = 204, description = "User category deleted"),
        (status = 404, description = "User category not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_user_category(State(state): State<AppState>, Path(id): Path<RecordId>) -> Result<StatusCode> {
    let mut fixtures = state.store.write();
    if !fixtures.user_categories.remove(id) {
        return Err(Error::not_found("user category", id));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/user_roles",
    tag = "taxonomy",
    summary = "Create user role",
    request_body = UserRoleCreate,
    responses(
        (status = 201, description = "User role created", body = UserRoleResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_user_role(
    State(state): State<AppState>,
    Json(create): Json<UserRoleCreate>,
) -> Result<(StatusCode, Json<UserRoleResponse>)> {
    let mut fixtures = state.store.write();
    let record = fixtures.user_roles.insert(|id| UserRole {
        id,
        user_id: create.user_id,
        role_id: create.role_id,
    });
    Ok((StatusCode::CREATED, Json(UserRoleResponse::from(record))))
}

#[utoipa::path(
    delete,
    path = "/user_roles/{id}",
    tag = "taxonomy",
    summary = "Delete user role",
    responses(
        (status = 204, description = "User role deleted"),
        (status = 404, description = "User role not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_user_role(State(state): State<AppState>, Path(id): Path<RecordId>) -> Result<StatusCode> {
    let mut fixtures = state.store.write();
    if !fixtures.user_roles.remove(id) {
        return Err(Error::not_found("user role", id));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/user_skills",
    tag = "taxonomy",
    summary = "List user skills",
    responses(
        (status = 200, description = "List of user skills", body = Vec<UserSkillResponse>)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_user_skills(State(state): State<AppState>) -> Result<Json<Vec<UserSkillResponse>>> {
    let fixtures = state.store.read();
    Ok(Json(fixtures.user_skills.iter().cloned().map(UserSkillResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/user_skills",
    tag = "taxonomy",
    summary = "Create user skill",
    request_body = UserSkillCreate,
    responses(
        (status = 201, description = "User skill created", body = UserSkillResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_user_skill(
    State(state): State<AppState>,
    Json(create): Json<UserSkillCreate>,
) -> Result<(StatusCode, Json<UserSkillResponse>)> {
    let mut fixtures = state.store.write();
    let record = fixtures.user_skills.insert(|id| UserSkill {
        id,
        user_id: create.user_id,
        skill_id: create.skill_id,
    });
    Ok((StatusCode::CREATED, Json(UserSkillResponse::from(record))))
}

#[utoipa::path(
    delete,
    path = "/user_skills/{id}",
    tag = "taxonomy",
    summary = "Delete user skill",
    responses(
        (status = 204, description = "User skill deleted"),
        (status = 404, description = "User skill not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_user_skill(State(state): State<AppState>, Path(id): Path<RecordId>) -> Result<StatusCode> {
    let mut fixtures = state.store.write();
    if !fixtures.user_skills.remove(id) {
        return Err(Error::not_found("user skill", id));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::test_utils::*;
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    #[test_log::test(tokio::test)]
    async fn test_taxonomy_listings() {
        let (server, _state) = create_test_app(true).await;

        let categories: Value = server.get("/categories").await.json();
        assert_eq!(categories.as_array().map(Vec::len), Some(3));

        let skills: Value = server.get("/skills").await.json();
        assert_eq!(skills.as_array().map(Vec::len), Some(4));

        let skill: Value = server.get("/skills/1").await.json();
        assert_eq!(skill["title"], "Ember.js");
        server.get("/skills/99").await.assert_status(StatusCode::NOT_FOUND);

        let roles: Value = server.get("/roles").await.json();
        assert_eq!(roles.as_array().map(Vec::len), Some(4));
    }

    #[test_log::test(tokio::test)]
    async fn test_user_category_lifecycle() {
        let (server, _state) = create_test_app(true).await;

        let created: Value = server
            .post("/user_categories")
            .json(&json!({ "user_id": 1, "category_id": 2 }))
            .await
            .json();
        let id = created["id"].as_i64().unwrap();

        let fetched: Value = server.get(&format!("/user_categories/{id}")).await.json();
        assert_eq!(fetched["category_id"], 2);

        let listed: Value = server.get("/user_categories").await.json();
        assert_eq!(listed.as_array().map(Vec::len), Some(1));

        server
            .delete(&format!("/user_categories/{id}"))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server
            .delete(&format!("/user_categories/{id}"))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[test_log::test(tokio::test)]
    async fn test_user_role_and_skill_joins() {
        let (server, _state) = create_test_app(true).await;

        let role: Value = server.post("/user_roles").json(&json!({ "user_id": 1, "role_id": 1 })).await.json();
        server
            .delete(&format!("/user_roles/{}", role["id"]))
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let skill: Value = server
            .post("/user_skills")
            .json(&json!({ "user_id": 1, "skill_id": 3 }))
            .await
            .json();
        let listed: Value = server.get("/user_skills").await.json();
        assert_eq!(listed.as_array().map(Vec::len), Some(1));
        server
            .delete(&format!("/user_skills/{}", skill["id"]))
            .await
            .assert_status(StatusCode::NO_CONTENT);
    }
}
