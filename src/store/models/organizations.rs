//! Organization fixture records, memberships, and slugged routes.

use crate::store::Record;
use crate::types::{OrganizationId, OrganizationMembershipId, RecordId, SluggedRouteId, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

impl Record for Organization {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationMembership {
    pub id: OrganizationMembershipId,
    pub organization_id: OrganizationId,
    pub member_id: UserId,
    /// Membership level label ("pending", "contributor", "admin", "owner")
    pub role: String,
}

impl Record for OrganizationMembership {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Vanity-URL record mapping a top-level slug to its owning organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SluggedRoute {
    pub id: SluggedRouteId,
    pub slug: String,
    pub organization_id: OrganizationId,
}

impl Record for SluggedRoute {
    fn id(&self) -> RecordId {
        self.id
    }
}
