//! API request/response models for the mock OAuth token endpoint.

use crate::types::UserId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Form body of a password-grant token request.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TokenRequest {
    pub grant_type: String,
    pub username: String,
    pub password: String,
}

/// Successful token response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    pub user_id: UserId,
    pub token_type: String,
    pub expires_in: u64,
}
