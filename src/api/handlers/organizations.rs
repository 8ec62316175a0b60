//! Organization and organization-membership endpoints.

use crate::AppState;
use crate::api::models::organizations::{
    ListMembershipsQuery, OrganizationMembershipCreate, OrganizationMembershipResponse, OrganizationMembershipUpdate,
    OrganizationResponse,
};
use crate::errors::{Error, Result};
use crate::store::models::organizations::OrganizationMembership;
use crate::types::{OrganizationId, OrganizationMembershipId};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

#[utoipa::path(
    get,
    path = "/organizations",
    tag = "organizations",
    summary = "List organizations",
    responses(
        (status = 200, description = "List of organizations", body = Vec<OrganizationResponse>)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_organizations(State(state): State<AppState>) -> Result<Json<Vec<OrganizationResponse>>> {
    let fixtures = state.store.read();
    let organizations = fixtures.organizations.iter().cloned().map(OrganizationResponse::from).collect();
    Ok(Json(organizations))
}

#[utoipa::path(
    get,
    path = "/organizations/{organization_id}",
    tag = "organizations",
    summary = "Get organization",
    responses(
        (status = 200, description = "Organization details", body = OrganizationResponse),
        (status = 404, description = "Organization not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_organization(
    State(state): State<AppState>,
    Path(organization_id): Path<OrganizationId>,
) -> Result<Json<OrganizationResponse>> {
    let fixtures = state.store.read();
    let organization = fixtures.organizations.get(organization_id).ok_or(Error::not_found("organization", organization_id))?;
    Ok(Json(OrganizationResponse::from(organization.clone())))
}

#[utoipa::path(
    get,
    path = "/organization_memberships",
    tag = "organizations",
    summary = "List organization memberships",
    params(ListMembershipsQuery),
    responses(
        (status = 200, description = "List of memberships", body = Vec<OrganizationMembershipResponse>)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_memberships(
    State(state): State<AppState>,
    Query(query): Query<ListMembershipsQuery>,
) -> Result<Json<Vec<OrganizationMembershipResponse>>> {
    let fixtures = state.store.read();
    let memberships = fixtures
        .organization_memberships
        .iter()
        .filter(|m| query.organization_id.is_none_or(|id| m.organization_id == id))
        .cloned()
        .map(OrganizationMembershipResponse::from)
        .collect();
    Ok(Json(memberships))
}

#[utoipa::path(
    post,
    path = "/organization_memberships",
    tag = "organizations",
    summary = "Create organization membership",
    request_body = OrganizationMembershipCreate,
    responses(
        (status = 201, description = "Membership created", body = OrganizationMembershipResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_membership(
    State(state): State<AppState>,
    Json(create): Json<OrganizationMembershipCreate>,
) -> Result<(StatusCode, Json<OrganizationMembershipResponse>)> {
    let mut fixtures = state.store.write();
    let membership = fixtures.organization_memberships.insert(|id| OrganizationMembership {
        id,
        organization_id: create.organization_id,
        member_id: create.member_id,
        role: create.role.clone(),
    });
    Ok((StatusCode::CREATED, Json(OrganizationMembershipResponse::from(membership))))
}

#[utoipa::path(
    get,
    path = "/organization_memberships/{membership_id}",
    tag = "organizations",
    summary = "Get organization membership",
    responses(
        (status = 200, description = "Membership details", body = OrganizationMembershipResponse),
        (status = 404, description = "Membership not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_membership(
    State(state): State<AppState>,
    Path(membership_id): Path<OrganizationMembershipId>,
) -> Result<Json<OrganizationMembershipResponse>> {
    let fixtures = state.store.read();
    let membership = fixtures.organization_memberships.get(membership_id).ok_or(Error::not_found("organization membership", membership_id))?;
    Ok(Json(OrganizationMembershipResponse::from(membership.clone())))
}

#[utoipa::path(
    patch,
    path = "/organization_memberships/{membership_id}",
    tag = "organizations",
    summary = "Update organization membership",
    request_body = OrganizationMembershipUpdate,
    responses(
        (status = 200, description = "Updated membership", body = OrganizationMembershipResponse),
        (status = 404, description = "Membership not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_membership(
    State(state): State<AppState>,
    Path(membership_id): Path<OrganizationMembershipId>,
    Json(update): Json<OrganizationMembershipUpdate>,
) -> Result<Json<OrganizationMembershipResponse>> {
    let mut fixtures = state.store.write();
    let membership = fixtures.organization_memberships.get_mut(membership_id).ok_or(Error::not_found("organization membership", membership_id))?;

    if let Some(role) = update.role {
        membership.role = role;
    }

    Ok(Json(OrganizationMembershipResponse::from(membership.clone())))
}

#[utoipa::path(
    delete,
    path = "/organization_memberships/{membership_id}",
    tag = "organizations",
    summary = "Delete organization membership",
    responses(
        (status = 204, description = "Membership deleted"),
        (status = 404, description = "Membership not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_membership(State(state): State<AppState>, Path(membership_id): Path<OrganizationMembershipId>) -> Result<StatusCode> {
    let mut fixtures = state.store.write();
    if !fixtures.organization_memberships.remove(membership_id) {
        return Err(Error::not_found("organization membership", membership_id));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::test_utils::*;
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    #[test_log::test(tokio::test)]
    async fn test_list_and_get_organizations() {
        let (server, _state) = create_test_app(true).await;

        let list: Value = server.get("/organizations").await.json();
        assert_eq!(list.as_array().map(Vec::len), Some(1));
        assert_eq!(list[0]["slug"], "code-corps");

        let one: Value = server.get("/organizations/1").await.json();
        assert_eq!(one["name"], "Code Corps");

        server.get("/organizations/42").await.assert_status(StatusCode::NOT_FOUND);
    }

    #[test_log::test(tokio::test)]
    async fn test_membership_lifecycle() {
        let (server, _state) = create_test_app(true).await;

        let response = server
            .post("/organization_memberships")
            .json(&json!({ "organization_id": 1, "member_id": 2 }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created: Value = response.json();
        assert_eq!(created["role"], "pending");
        let id = created["id"].as_i64().unwrap();

        let updated: Value = server
            .patch(&format!("/organization_memberships/{id}"))
            .json(&json!({ "role": "contributor" }))
            .await
            .json();
        assert_eq!(updated["role"], "contributor");

        server
            .delete(&format!("/organization_memberships/{id}"))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server
            .get(&format!("/organization_memberships/{id}"))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[test_log::test(tokio::test)]
    async fn test_membership_list_filters_by_organization() {
        let (server, _state) = create_test_app(true).await;

        let all: Value = server.get("/organization_memberships").await.json();
        assert_eq!(all.as_array().map(Vec::len), Some(1));

        let none: Value = server
            .get("/organization_memberships")
            .add_query_param("organization_id", 99)
            .await
            .json();
        assert_eq!(none.as_array().map(Vec::len), Some(0));
    }
}
