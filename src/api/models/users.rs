//! API request/response models for users.

use crate::store::models::users::User;
use crate::types::UserId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Current onboarding state (e.g. "signed_up", "edited_profile")
    pub state: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            state: user.state,
        }
    }
}

/// Body of a current-user update.
///
/// The record to change is named by `id`; missing fields are left untouched.
/// `state_transition` requests an onboarding step rather than setting `state`
/// directly.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserUpdate {
    pub id: UserId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub state_transition: Option<String>,
}

/// Availability check result. The mock always reports available and valid.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AvailabilityResponse {
    pub available: bool,
    pub valid: bool,
}
