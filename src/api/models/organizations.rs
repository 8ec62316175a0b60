//! API request/response models for organizations, memberships, and slugged routes.

use crate::store::models::organizations::{Organization, OrganizationMembership, SluggedRoute};
use crate::types::{OrganizationId, OrganizationMembershipId, SluggedRouteId, UserId};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrganizationResponse {
    pub id: OrganizationId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

impl From<Organization> for OrganizationResponse {
    fn from(org: Organization) -> Self {
        Self {
            id: org.id,
            name: org.name,
            slug: org.slug,
            description: org.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrganizationMembershipResponse {
    pub id: OrganizationMembershipId,
    pub organization_id: OrganizationId,
    pub member_id: UserId,
    /// "pending", "contributor", "admin", or "owner"
    pub role: String,
}

impl From<OrganizationMembership> for OrganizationMembershipResponse {
    fn from(m: OrganizationMembership) -> Self {
        Self {
            id: m.id,
            organization_id: m.organization_id,
            member_id: m.member_id,
            role: m.role,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct OrganizationMembershipCreate {
    pub organization_id: OrganizationId,
    pub member_id: UserId,
    #[serde(default = "default_membership_role")]
    pub role: String,
}

fn default_membership_role() -> String {
    "pending".to_string()
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct OrganizationMembershipUpdate {
    pub role: Option<String>,
}

/// Query parameters for listing organization memberships.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ListMembershipsQuery {
    /// Restrict to memberships of one organization
    pub organization_id: Option<OrganizationId>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SluggedRouteResponse {
    pub id: SluggedRouteId,
    pub slug: String,
    pub organization_id: OrganizationId,
}

impl From<SluggedRoute> for SluggedRouteResponse {
    fn from(route: SluggedRoute) -> Self {
        Self {
            id: route.id,
            slug: route.slug,
            organization_id: route.organization_id,
        }
    }
}
